use std::convert::Infallible;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("The source code, if provided, must be a string or buffer (got {0})")]
    InvalidSource(&'static str),

    #[error("Source buffer is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Cannot parse: {0}")]
    Parse(String),

    #[error("Malformed attribute `{body}`: {reason}")]
    Expression { body: String, reason: String },

    #[error("Unsupported type: {0}")]
    UnsupportedType(&'static str),

    #[error("Attribute not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),
}

impl From<Infallible> for AssemblyError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

pub type Result<T> = std::result::Result<T, AssemblyError>;
