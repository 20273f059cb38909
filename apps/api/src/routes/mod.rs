pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/ai-interview", post(handlers::handle_interview))
        .with_state(state)
}
