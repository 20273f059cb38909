use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and the number of interviews in progress.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "interview-api",
        "active_sessions": state.orchestrator.active_sessions().await
    }))
}
