//! JSON wire codec for the request envelope.
//!
//! Wire shape:
//!
//! ```json
//! {
//!   "taskId": "t-1",
//!   "url": "https://server.example/api",
//!   "method": "POST",
//!   "body": "...",
//!   "header": { "Accept": "application/json", "X-Trace": ["a", "b"] }
//! }
//! ```
//!
//! Top-level keys are written in that fixed order, header always last.
//! Decoding accepts any key order, skips unknown fields, and treats missing
//! recognized fields as empty. `tryCount` and `startTime` never touch the
//! wire; a decoded request is stamped from the codec's clock with a zero
//! counter, exactly as a freshly constructed one.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;
use std::io;

use crate::domain::{CodecError, HeaderMap, HeaderValue, Request, TaskId};
use crate::ports::{Clock, Normalizer, SystemClock};

/// Bidirectional transform between [`Request`] and its JSON wire form.
///
/// Holds the normalization hook applied on decode and the clock that stamps
/// decoded requests. The hook runs on `url`, `body`, and every header string
/// value (each list element separately), exactly once per occurrence;
/// `taskId` and `method` pass through verbatim.
pub struct RequestCodec<N, C = SystemClock> {
    normalizer: N,
    clock: C,
}

impl<N: Normalizer> RequestCodec<N> {
    pub fn new(normalizer: N) -> Self {
        Self {
            normalizer,
            clock: SystemClock,
        }
    }
}

impl<N: Normalizer, C: Clock> RequestCodec<N, C> {
    pub fn with_clock(normalizer: N, clock: C) -> Self {
        Self { normalizer, clock }
    }

    /// Encode to an in-memory buffer.
    pub fn encode(&self, request: &Request) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(&Wire(request)).map_err(CodecError::Encode)
    }

    /// Encode straight into a writer. A sink failure surfaces as
    /// [`CodecError::Encode`]; nothing is retried here.
    pub fn encode_to_writer<W: io::Write>(
        &self,
        request: &Request,
        writer: W,
    ) -> Result<(), CodecError> {
        serde_json::to_writer(writer, &Wire(request)).map_err(CodecError::Encode)
    }

    /// Decode wire bytes back into a [`Request`].
    ///
    /// The input is buffered into a generic JSON node and branched on shape,
    /// which makes the header's scalar-vs-array decision a plain match
    /// instead of a parse-and-catch dance.
    pub fn decode(&self, bytes: &[u8]) -> Result<Request, CodecError> {
        let root: Value =
            serde_json::from_slice(bytes).map_err(|err| CodecError::Decode(err.to_string()))?;
        let Value::Object(fields) = root else {
            return Err(CodecError::Decode(format!(
                "expected a top-level object, got {}",
                json_kind(&root)
            )));
        };

        let mut task_id = String::new();
        let mut url = String::new();
        let mut method = String::new();
        let mut header = HeaderMap::new();
        let mut body = String::new();

        for (name, value) in fields {
            match name.as_str() {
                "taskId" => task_id = take_string(&name, value)?,
                "url" => url = self.normalizer.normalize(&take_string(&name, value)?),
                "method" => method = take_string(&name, value)?,
                "header" => header = self.decode_header(value)?,
                "body" => body = self.normalizer.normalize(&take_string(&name, value)?),
                // Unknown fields are skipped: older decoders must survive
                // newer wire payloads.
                _ => {}
            }
        }

        Ok(Request::new_at(
            TaskId::new(task_id),
            url,
            method,
            header,
            body,
            self.clock.now(),
        ))
    }

    fn decode_header(&self, value: Value) -> Result<HeaderMap, CodecError> {
        let Value::Object(entries) = value else {
            return Err(CodecError::Decode(format!(
                "header must be an object, got {}",
                json_kind(&value)
            )));
        };

        let mut header = HeaderMap::new();
        for (name, value) in entries {
            let decoded = match value {
                Value::String(raw) => HeaderValue::Single(self.normalizer.normalize(&raw)),
                Value::Array(items) => {
                    let mut values = Vec::with_capacity(items.len());
                    for item in items {
                        let Value::String(raw) = item else {
                            return Err(CodecError::Decode(format!(
                                "header '{name}' has a non-string element: {}",
                                json_kind(&item)
                            )));
                        };
                        values.push(self.normalizer.normalize(&raw));
                    }
                    HeaderValue::List(values)
                }
                other => {
                    return Err(CodecError::Decode(format!(
                        "header '{name}' must be a string or an array of strings, got {}",
                        json_kind(&other)
                    )));
                }
            };
            header.insert(name, decoded);
        }
        Ok(header)
    }
}

/// Wire view of a request: the five serialized fields in their fixed order.
struct Wire<'a>(&'a Request);

impl Serialize for Wire<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_struct("Request", 5)?;
        out.serialize_field("taskId", self.0.task_id().as_str())?;
        out.serialize_field("url", self.0.url())?;
        out.serialize_field("method", self.0.method())?;
        out.serialize_field("body", self.0.body())?;
        out.serialize_field("header", self.0.header())?;
        out.end()
    }
}

fn take_string(field: &str, value: Value) -> Result<String, CodecError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(CodecError::Decode(format!(
            "field '{field}' must be a string, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
