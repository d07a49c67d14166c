//! Route definitions for the broker endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::broker;
use crate::state::AppState;

/// Broker routes mounted at the root.
///
/// ```text
/// POST /         -> broker
/// POST /handle   -> handle_submission
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(broker::broker))
        .route("/handle", post(broker::handle_submission))
}
