//! Input accepted when constructing a document.

use crate::error::{AssemblyError, Result};
use serde_json::Value;
use std::borrow::Cow;

/// Source text to scan: text, a UTF-8 buffer, or nothing (generation only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source<'a> {
    Text(Cow<'a, str>),
    Bytes(Cow<'a, [u8]>),
    Absent,
}

impl<'a> Source<'a> {
    /// Resolve to owned text. Absent sources are empty.
    pub fn into_text(self) -> Result<String> {
        match self {
            Source::Text(text) => Ok(text.into_owned()),
            Source::Bytes(bytes) => Ok(std::str::from_utf8(&bytes)?.to_string()),
            Source::Absent => Ok(String::new()),
        }
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(text: &'a str) -> Self {
        Source::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Source<'_> {
    fn from(text: String) -> Self {
        Source::Text(Cow::Owned(text))
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(text: &'a String) -> Self {
        Source::Text(Cow::Borrowed(text.as_str()))
    }
}

impl<'a> From<&'a [u8]> for Source<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Source::Bytes(Cow::Borrowed(bytes))
    }
}

impl From<Vec<u8>> for Source<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Source::Bytes(Cow::Owned(bytes))
    }
}

impl<'a, T: Into<Source<'a>>> From<Option<T>> for Source<'a> {
    fn from(source: Option<T>) -> Self {
        source.map(Into::into).unwrap_or(Source::Absent)
    }
}

/// Untyped input: only strings and `null` are sources.
impl TryFrom<Value> for Source<'static> {
    type Error = AssemblyError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Source::Absent),
            Value::String(text) => Ok(Source::Text(Cow::Owned(text))),
            Value::Bool(_) => Err(AssemblyError::InvalidSource("boolean")),
            Value::Number(_) => Err(AssemblyError::InvalidSource("number")),
            Value::Array(_) => Err(AssemblyError::InvalidSource("array")),
            Value::Object(_) => Err(AssemblyError::InvalidSource("object")),
        }
    }
}
