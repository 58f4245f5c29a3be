use hot100cli::api::health;

#[tokio::test]
async fn test_health_reports_service_identity() {
    let response = health().await;

    assert_eq!(response.0["status"], "ok");
    assert_eq!(response.0["service"], "hot100cli");
    assert_eq!(response.0["version"], env!("CARGO_PKG_VERSION"));
}
