mod config;
mod errors;
mod interview;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::interview::orchestrator::InterviewOrchestrator;
use crate::interview::registry::InMemorySessionStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparsable values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview API v{}", env!("CARGO_PKG_VERSION"));

    // Sessions live in process memory and are lost on restart
    let store = Arc::new(InMemorySessionStore::new());
    let orchestrator = Arc::new(InterviewOrchestrator::new(store));
    info!("Session store initialized (in-memory)");

    let state = AppState { orchestrator };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
