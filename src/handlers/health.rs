//! Liveness endpoint.
//! Used by: server.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub pid: u32,
}

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health { status: "ok", pid: state.stats.pid() })
}
