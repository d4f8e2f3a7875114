//! Attribute values and the literal codec.
//!
//! Attribute arguments are limited to scalar literals. Decoding accepts the
//! forms both dialects write in practice: JSON-compatible double-quoted
//! strings, `true`/`false`, numbers, and single-quoted strings (rewritten to
//! double quotes before parsing). Encoding always produces the canonical JSON
//! form, so a rewritten string is double-quoted regardless of how it was
//! originally written.

use crate::error::{AssemblyError, Result};
use serde::Serialize;
use serde_json::{Number, Value};
use std::borrow::Cow;
use std::fmt;

const SINGLE_QUOTE: char = '\'';

/// Current value of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Marker attribute written without arguments (e.g. `[assembly: Foo]`).
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl AttrValue {
    /// Name of the value's type, as reported in encoding errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Null => "null",
            AttrValue::Bool(_) => "boolean",
            AttrValue::Number(_) => "number",
            AttrValue::String(_) => "string",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            AttrValue::Number(n) => Some(n),
            _ => None,
        }
    }
}

/// Renders the literal form; markers render as `null`.
impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match encode(self) {
            Ok(literal) => f.write_str(&literal),
            Err(_) => f.write_str("null"),
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<Number> for AttrValue {
    fn from(value: Number) -> Self {
        AttrValue::Number(value)
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AttrValue {
                fn from(value: $t) -> Self {
                    AttrValue::Number(Number::from(value))
                }
            }
        )*
    };
}

from_integer!(i32, i64, u32, u64);

impl TryFrom<f64> for AttrValue {
    type Error = AssemblyError;

    fn try_from(value: f64) -> Result<Self> {
        Number::from_f64(value)
            .map(AttrValue::Number)
            .ok_or(AssemblyError::UnsupportedType("non-finite number"))
    }
}

/// Dynamic values, e.g. parsed from user input. Arrays and objects have no
/// literal form.
impl TryFrom<Value> for AttrValue {
    type Error = AssemblyError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(AttrValue::Null),
            Value::Bool(b) => Ok(AttrValue::Bool(b)),
            Value::Number(n) => Ok(AttrValue::Number(n)),
            Value::String(s) => Ok(AttrValue::String(s)),
            Value::Array(_) => Err(AssemblyError::UnsupportedType("array")),
            Value::Object(_) => Err(AssemblyError::UnsupportedType("object")),
        }
    }
}

/// Decodes the argument text of an attribute call into a value.
pub fn decode(text: &str) -> Result<AttrValue> {
    let text = text.trim();
    let json = match text.strip_prefix(SINGLE_QUOTE) {
        Some(rest) => {
            let raw = rest
                .strip_suffix(SINGLE_QUOTE)
                .ok_or_else(|| AssemblyError::Parse(text.to_string()))?;
            let escaped = raw.replace('"', "\\\"").replace("\\'", "'");
            Cow::Owned(format!("\"{}\"", escaped))
        }
        None => Cow::Borrowed(text),
    };

    let parsed: Value =
        serde_json::from_str(&json).map_err(|_| AssemblyError::Parse(json.to_string()))?;
    AttrValue::try_from(parsed).map_err(|_| AssemblyError::Parse(json.into_owned()))
}

/// Encodes a value as literal argument text.
///
/// Numbers keep the form they were parsed or built with: `1.0` stays `1.0`
/// and integers never gain a decimal point.
pub fn encode(value: &AttrValue) -> Result<String> {
    match value {
        AttrValue::Bool(b) => Ok(b.to_string()),
        AttrValue::Number(n) => Ok(n.to_string()),
        AttrValue::String(s) => Ok(serde_json::to_string(s)?),
        AttrValue::Null => Err(AssemblyError::UnsupportedType(value.type_name())),
    }
}
