//! Fixed-shape JSON bodies shared by every endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{ "error": true, "message": "..." }` body sent for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Always `true`.
    pub error: bool,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
        }
    }

    /// Build the envelope from an error's display text.
    pub fn from_error<E>(err: &E) -> Self
    where
        E: fmt::Display + ?Sized,
    {
        Self::new(err.to_string())
    }
}

/// General reply shape: `{ "error": bool, "message": "...", "data": ... }`.
///
/// `data` is omitted from the output when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonResponse<T = Value> {
    pub error: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> JsonResponse<T> {
    /// A successful reply carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: false,
            message: message.into(),
            data: None,
        }
    }

    /// A successful reply carrying a message and a payload.
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            error: false,
            message: message.into(),
            data: Some(data),
        }
    }
}
