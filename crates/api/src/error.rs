use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jsonwire_core::error::JsonError;

use crate::json::{error_json, ResponseSink};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`JsonError`] for body faults and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so every failure reaches the client as the
/// standard `{"error": true, "message": ...}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A request or response body fault from `jsonwire_core`.
    #[error(transparent)]
    Json(#[from] JsonError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- Body faults ---
            AppError::Json(err @ JsonError::PayloadTooLarge { .. }) => {
                (StatusCode::PAYLOAD_TOO_LARGE, err.to_string())
            }
            AppError::Json(err @ (JsonError::MalformedJson(_) | JsonError::MultipleValues)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            AppError::Json(err @ (JsonError::Serialization(_) | JsonError::AlreadyWritten)) => {
                tracing::error!(error = %err, "JSON response error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        };

        let mut sink = ResponseSink::new();
        match error_json(&mut sink, &message, Some(status)) {
            Ok(()) => sink.into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to encode error envelope");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
