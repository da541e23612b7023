use axum::Json;
use axum::extract::State;

use crate::state::AppState;

/// GET /health - liveness probe with the current live session count.
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "sessions": state.sessions.live_sessions(),
    }))
}
