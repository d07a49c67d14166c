pub mod broker;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// GET  /health      service status
/// GET  /ping        liveness probe
/// POST /            broker acknowledgement
/// POST /handle      broker submission
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(broker::router())
}
