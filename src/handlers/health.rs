use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};
use std::time::SystemTime;
use tracing::info;

use crate::error::AppResult;
use crate::services::PARSE_PATH;
use crate::state::AppState;

/// Health check endpoint
pub async fn health_handler(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let timestamp = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    let sessions = state.sessions.len().await;

    let response = json!({
        "status": "healthy",
        "timestamp": timestamp,
        "version": env!("CARGO_PKG_VERSION"),
        "backend": {
            "url": state.config.backend_url,
            "parse_path": PARSE_PATH
        },
        "sessions": sessions
    });

    info!(sessions = sessions, "Health check completed");

    Ok(Json(response))
}

/// Readiness check endpoint. The UI holds no external connections of its
/// own, so it is ready as soon as it serves requests.
pub async fn ready_handler() -> StatusCode {
    StatusCode::OK
}
