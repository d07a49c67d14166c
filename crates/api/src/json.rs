//! JSON transport helper: write a JSON response, strictly read a JSON
//! request body, and write the standard error envelope.
//!
//! The helper never logs and never swallows a failure; every error goes back
//! to the calling handler, which decides what the client sees.

use axum::body::{Body, Bytes};
use axum::extract::Request;
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use jsonwire_core::codec::{self, MAX_BODY_BYTES};
use jsonwire_core::envelope::ErrorEnvelope;
use jsonwire_core::error::JsonError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Media type set on every response written through [`write_json`].
pub const APPLICATION_JSON: &str = "application/json";

/// Destination for one HTTP response: headers, status and body.
///
/// A sink accepts exactly one [`write_json`]; later writes fail with
/// [`JsonError::AlreadyWritten`] and leave the first response untouched.
/// Converting a sink that was never written yields an empty `200 OK`.
#[derive(Debug, Default)]
pub struct ResponseSink {
    headers: HeaderMap,
    status: Option<StatusCode>,
    body: Option<Bytes>,
}

impl ResponseSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status recorded by the write, if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Headers to send alongside whatever is written later.
    ///
    /// `Content-Type` set here is replaced by the write.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    pub fn is_written(&self) -> bool {
        self.body.is_some()
    }
}

impl IntoResponse for ResponseSink {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body.unwrap_or_default()));
        *response.status_mut() = self.status.unwrap_or(StatusCode::OK);
        *response.headers_mut() = self.headers;
        response
    }
}

/// Serialize `data` and write it to `sink` with the given status.
///
/// Each header set is applied in order; for every key it contains, the
/// sink's existing values for that key are replaced by all of the set's
/// values. `Content-Type: application/json` is set last so no header set
/// can override it. On any error the sink is left exactly as it was.
pub fn write_json<T>(
    sink: &mut ResponseSink,
    status: StatusCode,
    data: &T,
    headers: &[HeaderMap],
) -> Result<(), JsonError>
where
    T: Serialize + ?Sized,
{
    if sink.is_written() {
        return Err(JsonError::AlreadyWritten);
    }

    let bytes = codec::encode(data)?;

    for set in headers {
        for key in set.keys() {
            sink.headers.remove(key);
            for value in set.get_all(key) {
                sink.headers.append(key.clone(), value.clone());
            }
        }
    }

    sink.headers
        .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    sink.status = Some(status);
    sink.body = Some(Bytes::from(bytes));

    Ok(())
}

/// Decode the request body into `T`, capped at [`MAX_BODY_BYTES`].
pub async fn read_json<T>(request: Request) -> Result<T, JsonError>
where
    T: DeserializeOwned,
{
    read_json_limited(request, MAX_BODY_BYTES).await
}

/// Decode the request body into `T`, reading at most `limit` bytes.
///
/// A declared `Content-Length` above the limit is rejected before any of
/// the body is read.
pub async fn read_json_limited<T>(request: Request, limit: usize) -> Result<T, JsonError>
where
    T: DeserializeOwned,
{
    if declared_length(request.headers()).is_some_and(|len| len > limit as u64) {
        return Err(JsonError::PayloadTooLarge { limit });
    }

    let body = Limited::new(request.into_body(), limit);
    let bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => {
            return Err(JsonError::PayloadTooLarge { limit });
        }
        Err(err) => {
            return Err(JsonError::MalformedJson(format!(
                "failed to read request body: {err}"
            )));
        }
    };

    codec::decode_strict(&bytes)
}

/// Write `{"error": true, "message": <err>}` to `sink`.
///
/// `status` defaults to `400 Bad Request`. The returned `Result` reports
/// whether the envelope itself was written, not the error it carries.
pub fn error_json<E>(
    sink: &mut ResponseSink,
    err: &E,
    status: Option<StatusCode>,
) -> Result<(), JsonError>
where
    E: std::fmt::Display + ?Sized,
{
    let status = status.unwrap_or(StatusCode::BAD_REQUEST);
    write_json(sink, status, &ErrorEnvelope::from_error(err), &[])
}

fn declared_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}
