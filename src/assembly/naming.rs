//! Attribute name normalization.
//!
//! A declaration's name maps to a canonical registry key by stripping the
//! `Attribute` suffix (and, for JScript, upper-casing the first letter). The
//! name written back out is the key plus the suffix when the document is in
//! suffix mode.

use crate::config::Language;

pub const SUFFIX: &str = "Attribute";

/// Canonical key for `name`, and whether `name` carried the suffix.
pub fn canonicalize(name: &str, language: Language) -> (String, bool) {
    let name = match language {
        Language::CSharp => name.to_string(),
        Language::JScript => pascal_case(name),
    };

    match name.strip_suffix(SUFFIX) {
        Some(key) if !key.is_empty() => (key.to_string(), true),
        _ => (name, false),
    }
}

/// Name emitted in rewritten declarations.
pub fn written_name(key: &str, suffix_mode: bool) -> String {
    if suffix_mode {
        format!("{}{}", key, SUFFIX)
    } else {
        key.to_string()
    }
}

fn pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
