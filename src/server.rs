//! Axum router and server setup.
//! Used by: main.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::error::Result;
use crate::handlers;
use crate::middleware;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let stats = Arc::clone(&state.stats);
    let stats_path = state.config.stats_path.clone();
    let router = Router::new()
        .route("/health", get(handlers::health::health))
        .route(&stats_path, get(handlers::stats::stats))
        .layer(CorsLayer::permissive())
        .with_state(state);
    middleware::wrap(router, stats)
}

pub async fn run(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr;
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router).await?;
    Ok(())
}
