//! Shared application state.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::stats::Stats;

pub struct AppStateInner {
    pub stats: Arc<Stats>,
    pub config: ServerConfig,
}

pub type AppState = Arc<AppStateInner>;

/// State with a live window reset task. Must be called inside a Tokio runtime.
pub fn build_state(config: ServerConfig) -> AppState {
    Arc::new(AppStateInner { stats: Stats::spawn(), config })
}

/// State whose window only clears when a test resets it.
pub fn build_test_state() -> AppState {
    Arc::new(AppStateInner {
        stats: Arc::new(Stats::new()),
        config: ServerConfig::default(),
    })
}
