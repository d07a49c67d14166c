use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Router};
use serde::Serialize;

use crate::error::AppResult;
use crate::json::{write_json, ResponseSink};
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- returns service status and version.
async fn health_check() -> AppResult<ResponseSink> {
    let mut sink = ResponseSink::new();
    write_json(
        &mut sink,
        StatusCode::OK,
        &HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        },
        &[],
    )?;
    Ok(sink)
}

/// GET /ping -- plain-text liveness probe for load balancers.
async fn heartbeat() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/plain")], ".")
}

/// Mount health routes at the root level.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ping", get(heartbeat))
}
