//! Terminal output for command results.

use assembly_source::{AttrValue, Result};
use colored::*;
use indexmap::IndexMap;

/// Strings print raw so the output can be captured by build scripts; other
/// values print as literals.
pub fn format_value(value: &AttrValue) -> String {
    match value {
        AttrValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn render_attribute_list(attributes: &IndexMap<String, AttrValue>, color: bool) -> String {
    let width = attributes.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    attributes
        .iter()
        .map(|(key, value)| {
            let padding = " ".repeat(width - key.chars().count());
            let key = if color {
                key.bold().to_string()
            } else {
                key.clone()
            };
            format!("{}{} = {}", key, padding, value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_attribute_json(attributes: &IndexMap<String, AttrValue>) -> Result<String> {
    Ok(serde_json::to_string_pretty(attributes)?)
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IndexMap<String, AttrValue> {
        let mut attributes = IndexMap::new();
        attributes.insert("AssemblyTitle".to_string(), AttrValue::from("Foo"));
        attributes.insert("ComVisible".to_string(), AttrValue::Bool(false));
        attributes.insert("Marker".to_string(), AttrValue::Null);
        attributes
    }

    #[test]
    fn format_value_prints_strings_raw() {
        assert_eq!(format_value(&AttrValue::from("1.0.0")), "1.0.0");
        assert_eq!(format_value(&AttrValue::Bool(true)), "true");
        assert_eq!(format_value(&AttrValue::Null), "null");
    }

    #[test]
    fn list_aligns_values() {
        let rendered = render_attribute_list(&sample(), false);
        assert_eq!(
            rendered,
            "AssemblyTitle = \"Foo\"\nComVisible    = false\nMarker        = null"
        );
    }

    #[test]
    fn list_bolds_keys_when_colored() {
        let rendered = render_attribute_list(&sample(), true);
        assert!(rendered.contains(" = \"Foo\""));
        assert!(rendered.contains("ComVisible"));
    }

    #[test]
    fn json_keeps_registration_order() {
        let rendered = render_attribute_json(&sample()).unwrap();
        assert_eq!(
            rendered,
            "{\n  \"AssemblyTitle\": \"Foo\",\n  \"ComVisible\": false,\n  \"Marker\": null\n}"
        );
    }
}
