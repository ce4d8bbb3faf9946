//! reqstats: per-status request counts and response latency for axum services.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod state;
pub mod stats;
