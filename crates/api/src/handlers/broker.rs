//! Handlers for the broker endpoints.
//!
//! The broker is the front door of the service: it acknowledges hits and
//! dispatches submitted actions. Bodies are decoded with [`StrictJson`] and
//! every reply goes through the JSON helper.

use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use jsonwire_core::envelope::JsonResponse;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppResult;
use crate::extract::StrictJson;
use crate::json::{error_json, write_json, ResponseSink};

/// Header naming the action a submission was dispatched to.
pub const BROKER_ACTION_HEADER: &str = "x-broker-action";

/// Body accepted by `POST /handle`.
#[derive(Debug, Deserialize)]
pub struct RequestPayload {
    pub action: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// POST /
///
/// Acknowledge the hit with `202 Accepted`.
pub async fn broker() -> AppResult<ResponseSink> {
    let mut sink = ResponseSink::new();
    let payload: JsonResponse = JsonResponse::message("Hit the broker");
    write_json(&mut sink, StatusCode::ACCEPTED, &payload, &[])?;
    Ok(sink)
}

/// POST /handle
///
/// Dispatch a submission by its `action`. `echo` returns the submitted data;
/// anything else is answered with the error envelope and `400`.
pub async fn handle_submission(
    StrictJson(payload): StrictJson<RequestPayload>,
) -> AppResult<ResponseSink> {
    let mut sink = ResponseSink::new();

    match payload.action.as_str() {
        "echo" => {
            let mut headers = HeaderMap::new();
            headers.insert(
                HeaderName::from_static(BROKER_ACTION_HEADER),
                HeaderValue::from_static("echo"),
            );

            let reply = match payload.data {
                Some(data) => JsonResponse::with_data("echo", data),
                None => JsonResponse::message("echo"),
            };
            write_json(&mut sink, StatusCode::OK, &reply, &[headers])?;

            tracing::debug!(action = "echo", "Broker submission handled");
        }
        other => {
            tracing::warn!(action = %other, "Unknown broker action");
            error_json(&mut sink, &format!("unknown action: {other}"), None)?;
        }
    }

    Ok(sink)
}
