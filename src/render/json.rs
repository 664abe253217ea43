//! JSON rendering of the parsed element tree.

use crate::error::Result;
use crate::model::Element;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert parsed elements to JSON.
pub fn to_json(elements: &[Element], format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(elements)?,
        JsonFormat::Compact => serde_json::to_string(elements)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InlineSpan;

    #[test]
    fn test_to_json_pretty() {
        let elements = vec![
            Element::heading(1, "Guide"),
            Element::paragraph(vec![InlineSpan::bold("hi")]),
        ];
        let json = to_json(&elements, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"type\": \"heading\""));
        assert!(json.contains("\"type\": \"bold\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&[Element::Rule], JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"[{"type":"rule"}]"#);
    }
}
