//! Header mapping: name to a single value or an ordered list of values.

use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;

/// A header's value as it appears on the wire.
///
/// The wire format permits exactly two shapes under a header name: one JSON
/// string, or a JSON array of strings. Decode rejects everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValue {
    Single(String),
    List(Vec<String>),
}

impl HeaderValue {
    pub fn single(value: impl Into<String>) -> Self {
        Self::Single(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::List(values) => Some(values),
        }
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        Self::single(value)
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for HeaderValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl Serialize for HeaderValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HeaderValue::Single(value) => serializer.serialize_str(value),
            HeaderValue::List(values) => serializer.collect_seq(values),
        }
    }
}

/// Header name -> value mapping.
///
/// Key order carries no meaning, but BTreeMap iteration is deterministic, so
/// a decode/encode pair in the same process reproduces identical bytes.
pub type HeaderMap = BTreeMap<String, HeaderValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_serializes_as_plain_string() {
        let json = serde_json::to_string(&HeaderValue::single("application/json")).unwrap();
        assert_eq!(json, r#""application/json""#);
    }

    #[test]
    fn list_serializes_as_string_array() {
        let json = serde_json::to_string(&HeaderValue::list(["a", "b"])).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
    }

    #[test]
    fn accessors_match_shape() {
        let single = HeaderValue::single("v");
        assert_eq!(single.as_single(), Some("v"));
        assert_eq!(single.as_list(), None);

        let list = HeaderValue::list(["x", "y"]);
        assert_eq!(list.as_single(), None);
        assert_eq!(list.as_list().unwrap().len(), 2);
    }
}
