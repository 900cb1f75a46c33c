use thiserror::Error;

/// Codec failures.
///
/// Missing recognized fields and unknown top-level fields are not errors;
/// the decoder handles both silently. See `RequestCodec`.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The underlying writer or serializer failed while emitting JSON.
    #[error("encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The input was not the wire shape: not JSON at all, not a top-level
    /// object, or a header entry that is neither a string nor an array of
    /// strings.
    #[error("decode failed: {0}")]
    Decode(String),
}

/// Failures surfaced by a `Transport` implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("server rejected request: {0}")]
    Rejected(String),

    #[error("connection failed: {0}")]
    Connection(String),
}
