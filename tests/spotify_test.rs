use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use chrono::NaiveDate;
use hot100cli::{billboard::extract_titles, config::Config, spotify, types::ChartEntry, utils};
use serde_json::{Value, json};

// Records every call the client makes so tests can assert on call counts
// and payloads.
#[derive(Clone, Default)]
struct MockApi {
    search_queries: Arc<Mutex<Vec<String>>>,
    create_calls: Arc<Mutex<Vec<Value>>>,
    add_calls: Arc<Mutex<Vec<Value>>>,
}

async fn search(
    Query(params): Query<HashMap<String, String>>,
    State(api): State<MockApi>,
) -> Json<Value> {
    let q = params.get("q").cloned().unwrap_or_default();
    api.search_queries.lock().unwrap().push(q.clone());

    let title = q
        .strip_prefix("track:")
        .and_then(|rest| rest.split(" year:").next())
        .unwrap_or_default()
        .to_string();

    // Title "B" has no catalog entry; everything else resolves to a URI
    // derived from the title
    let items = if title == "B" {
        json!([])
    } else {
        json!([{
            "id": format!("id-{}", title),
            "name": title,
            "uri": format!("spotify:track:{}", title.to_lowercase()),
        }])
    };

    Json(json!({ "tracks": { "items": items } }))
}

async fn me() -> Json<Value> {
    Json(json!({ "id": "listener", "display_name": "Listener" }))
}

async fn create_playlist(
    Path(user_id): Path<String>,
    State(api): State<MockApi>,
    Json(body): Json<Value>,
) -> Json<Value> {
    assert_eq!(user_id, "listener");
    api.create_calls.lock().unwrap().push(body.clone());
    Json(json!({
        "id": "playlist-1",
        "name": body["name"],
        "public": false,
        "collaborative": false,
    }))
}

async fn add_tracks(
    Path(playlist_id): Path<String>,
    State(api): State<MockApi>,
    Json(body): Json<Value>,
) -> Json<Value> {
    assert_eq!(playlist_id, "playlist-1");
    api.add_calls.lock().unwrap().push(body);
    Json(json!({ "snapshot_id": "snapshot-1" }))
}

async fn spawn_mock_api() -> (Config, MockApi) {
    let api = MockApi::default();
    let app = Router::new()
        .route("/search", get(search))
        .route("/me", get(me))
        .route("/users/{user_id}/playlists", post(create_playlist))
        .route("/playlists/{playlist_id}/tracks", post(add_tracks))
        .with_state(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (test_config(format!("http://{}", addr)), api)
}

fn test_config(api_url: String) -> Config {
    Config {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        api_url,
        auth_url: "http://127.0.0.1:1/authorize".to_string(),
        token_url: "http://127.0.0.1:1/api/token".to_string(),
        scope: "playlist-modify-private".to_string(),
        redirect_uri: "http://127.0.0.1:1/callback".to_string(),
        server_addr: "127.0.0.1:0".to_string(),
        chart_base_url: "http://127.0.0.1:1".to_string(),
    }
}

fn chart_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn chart_entries(titles: &[&str]) -> Vec<ChartEntry> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| ChartEntry {
            position: i + 1,
            title: title.to_string(),
        })
        .collect()
}

#[tokio::test]
async fn test_search_track_hit_and_miss() {
    let (config, api) = spawn_mock_api().await;

    let hit = spotify::search::search_track(&config, "token", "A", chart_date())
        .await
        .unwrap()
        .expect("title with a result resolves");
    assert_eq!(hit.uri, "spotify:track:a");
    assert_eq!(hit.title, "A");

    let miss = spotify::search::search_track(&config, "token", "B", chart_date())
        .await
        .unwrap();
    assert!(miss.is_none());

    // Each query embeds the title and the chart year
    let queries = api.search_queries.lock().unwrap().clone();
    assert_eq!(queries, vec!["track:A year:2020", "track:B year:2020"]);
}

#[tokio::test]
async fn test_resolve_titles_drops_misses_and_preserves_order() {
    let (config, api) = spawn_mock_api().await;
    let entries = chart_entries(&["A", "B", "C"]);

    let (resolved, misses) =
        spotify::search::resolve_titles(&config, "token", &entries, chart_date())
            .await
            .unwrap();

    // Misses are dropped, not null-padded
    assert!(resolved.len() <= entries.len());
    assert_eq!(resolved.len(), 2);

    // Matched entries keep their chart order
    let uris: Vec<&str> = resolved.iter().map(|t| t.uri.as_str()).collect();
    assert_eq!(uris, vec!["spotify:track:a", "spotify:track:c"]);

    // Exactly one miss, for the title with the empty result set
    assert_eq!(misses.len(), 1);
    assert_eq!(misses[0].title, "B");

    // One search per input title
    assert_eq!(api.search_queries.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn test_playlist_create_and_add_call_shape() {
    let (config, api) = spawn_mock_api().await;

    let user = spotify::playlist::current_user(&config, "token")
        .await
        .unwrap();
    assert_eq!(user.id, "listener");

    let name = utils::playlist_name(chart_date());
    let created = spotify::playlist::create(&config, "token", &user.id, name)
        .await
        .unwrap();
    assert_eq!(created.id, "playlist-1");

    let uris = vec![
        "spotify:track:a".to_string(),
        "spotify:track:c".to_string(),
    ];
    spotify::playlist::add_tracks(&config, "token", &created.id, uris.clone())
        .await
        .unwrap();

    // Exactly one create call: named for the date, private, not collaborative
    let creates = api.create_calls.lock().unwrap().clone();
    assert_eq!(creates.len(), 1);
    assert_eq!(creates[0]["name"], "Top songs of 2020-01-01");
    assert_eq!(creates[0]["public"], false);
    assert_eq!(creates[0]["collaborative"], false);
    // Name and visibility flags only; no extra fields like a description
    assert!(creates[0].get("description").is_none());

    // Exactly one bulk add whose payload is the full URI list, in order
    let adds = api.add_calls.lock().unwrap().clone();
    assert_eq!(adds.len(), 1);
    assert_eq!(adds[0]["uris"], json!(uris));
}

#[tokio::test]
async fn test_chart_to_playlist_end_to_end() {
    let (config, api) = spawn_mock_api().await;
    let date = chart_date();

    // Chart page with three titles; "B" has no catalog entry in the mock
    let html = r#"<html><body><ol>
        <li><span class="chart-element__information__song text--truncate color--primary">A</span></li>
        <li><span class="chart-element__information__song text--truncate color--primary">B</span></li>
        <li><span class="chart-element__information__song text--truncate color--primary">C</span></li>
    </ol></body></html>"#;
    let entries = extract_titles(html);
    assert_eq!(entries.len(), 3);

    let (resolved, misses) = spotify::search::resolve_titles(&config, "token", &entries, date)
        .await
        .unwrap();
    assert_eq!(misses.len(), 1);
    assert_eq!(misses[0].title, "B");

    let user = spotify::playlist::current_user(&config, "token")
        .await
        .unwrap();
    let created =
        spotify::playlist::create(&config, "token", &user.id, utils::playlist_name(date))
            .await
            .unwrap();
    let uris: Vec<String> = resolved.into_iter().map(|track| track.uri).collect();
    spotify::playlist::add_tracks(&config, "token", &created.id, uris)
        .await
        .unwrap();

    // One playlist named for the date, populated with the two hits in order
    let creates = api.create_calls.lock().unwrap().clone();
    assert_eq!(creates.len(), 1);
    assert_eq!(creates[0]["name"], "Top songs of 2020-01-01");

    let adds = api.add_calls.lock().unwrap().clone();
    assert_eq!(adds.len(), 1);
    assert_eq!(adds[0]["uris"], json!(["spotify:track:a", "spotify:track:c"]));
}
