/// Failures produced while moving JSON across the HTTP boundary.
///
/// `Serialization` and `AlreadyWritten` are server-side faults; the other
/// variants describe a bad request body and are safe to echo to the client.
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    #[error("failed to serialize JSON response: {0}")]
    Serialization(String),

    #[error("body must not be larger than {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("{0}")]
    MalformedJson(String),

    #[error("body must only contain a single JSON value")]
    MultipleValues,

    #[error("response has already been written")]
    AlreadyWritten,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_too_large_names_the_limit() {
        let err = JsonError::PayloadTooLarge { limit: 1_048_576 };
        assert_eq!(err.to_string(), "body must not be larger than 1048576 bytes");
    }
}
