//! Request timing middleware feeding the stats recorder.
//! Used by: server.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;

use crate::stats::Stats;

/// Time the inner service and count the status it finally returns.
///
/// Axum responses start as `200 OK`, so a handler that never sets a status
/// is recorded as 200. Handler failures are not intercepted.
pub async fn track(State(stats): State<Arc<Stats>>, request: Request, next: Next) -> Response {
    let mut scope = stats.begin();
    let response = next.run(request).await;
    scope.set_status(response.status().as_u16());
    stats.end(scope);
    response
}

/// Wrap every route of `router` with [`track`].
pub fn wrap<S>(router: Router<S>, stats: Arc<Stats>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(stats, track))
}
