//! Strict JSON encoding and decoding for request and response bodies.
//!
//! Nothing here knows about HTTP; the `jsonwire-api` crate wraps these
//! functions around request bodies and response sinks.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;

use crate::error::JsonError;

/// Largest request body accepted by default (1 MiB).
pub const MAX_BODY_BYTES: usize = 1_048_576;

/// Serialize `value` to compact JSON bytes.
pub fn encode<T>(value: &T) -> Result<Vec<u8>, JsonError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_vec(value).map_err(|err| JsonError::Serialization(err.to_string()))
}

/// Decode exactly one JSON document from `bytes` into `T`.
///
/// Rejects, in this order:
/// - empty or whitespace-only input,
/// - documents that are not valid JSON or do not match `T`,
/// - object keys that `T` does not consume, at any depth,
/// - anything other than whitespace after the first value.
///
/// The unknown-key check applies whether or not `T` opts into
/// `#[serde(deny_unknown_fields)]`, with one exception: keys that land in a
/// `#[serde(flatten)]` field are buffered by serde and never reported as
/// ignored, so unknown keys next to a flattened field are accepted. Targets
/// that must stay strict should not use `flatten`.
pub fn decode_strict<T>(bytes: &[u8]) -> Result<T, JsonError>
where
    T: DeserializeOwned,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(JsonError::MalformedJson("body must not be empty".into()));
    }

    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let mut unknown = Vec::new();

    let value: T = serde_ignored::deserialize(&mut deserializer, |path| {
        unknown.push(field_path(&path));
    })
    .map_err(describe_decode_error)?;

    if let Some(field) = unknown.first() {
        return Err(JsonError::MalformedJson(format!(
            "body contains unknown field \"{field}\""
        )));
    }

    deserializer.end().map_err(|_| JsonError::MultipleValues)?;

    Ok(value)
}

/// Dotted path of an ignored key as the client wrote it.
///
/// `serde_ignored` renders `Option` and newtype layers as `?` segments,
/// which have no counterpart in the JSON document.
fn field_path(path: &serde_ignored::Path<'_>) -> String {
    path.to_string()
        .split('.')
        .filter(|segment| *segment != "?")
        .collect::<Vec<_>>()
        .join(".")
}

fn describe_decode_error(err: serde_json::Error) -> JsonError {
    let message = match err.classify() {
        Category::Syntax => format!(
            "body contains badly-formed JSON (at line {} column {})",
            err.line(),
            err.column()
        ),
        Category::Eof => "body contains badly-formed JSON (unexpected end of input)".to_string(),
        Category::Data => format!("body contains an invalid value: {err}"),
        Category::Io => format!("failed to read body: {err}"),
    };
    JsonError::MalformedJson(message)
}
