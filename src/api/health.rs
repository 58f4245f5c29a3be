use axum::response::Json;
use serde_json::{Value, json};

/// Liveness endpoint for the local callback server, identifying which
/// service answered on the configured address.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
