//! Request extractors built on the JSON transport helper.

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::json::read_json_limited;
use crate::state::AppState;

/// Strictly decoded JSON request body.
///
/// Unlike `axum::Json`, this rejects unknown fields, trailing content after
/// the first value, and bodies above `ServerConfig::max_body_bytes`. It does
/// not look at the request's `Content-Type`.
///
/// ```ignore
/// async fn create(StrictJson(input): StrictJson<CreateThing>) -> AppResult<ResponseSink> {
///     // input had exactly the fields CreateThing declares
/// }
/// ```
#[derive(Debug)]
pub struct StrictJson<T>(pub T);

impl<T> FromRequest<AppState> for StrictJson<T>
where
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let value = read_json_limited(req, state.config.max_body_bytes).await?;
        Ok(StrictJson(value))
    }
}
