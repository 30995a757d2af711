//! Field-file text rules.
//!
//! Field files hold raw, hand-edited text. Scalar fields are trimmed;
//! `seeAlso` holds one reference per line and becomes a JSON array.

use crate::model::SEE_ALSO;
use serde_json::Value;

/// Convert the raw contents of a field file into the value stored in a record.
pub fn parse_field(field: &str, raw: &str) -> Value {
    if field == SEE_ALSO {
        Value::Array(split_lines(raw).into_iter().map(Value::String).collect())
    } else {
        Value::String(raw.trim().to_string())
    }
}

/// Non-empty lines, each trimmed, in file order.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_fields_are_trimmed() {
        assert_eq!(parse_field("name", "  MIT X License \n\n"), json!("MIT X License"));
        assert_eq!(parse_field("licenseText", ""), json!(""));
    }

    #[test]
    fn scalar_fields_keep_inner_newlines() {
        assert_eq!(
            parse_field("licenseText", "\nline one\n\nline two\n"),
            json!("line one\n\nline two")
        );
    }

    #[test]
    fn see_also_becomes_ordered_lines() {
        let raw = "https://a.example\r\n\n  https://b.example  \nhttps://c.example";
        assert_eq!(
            parse_field(SEE_ALSO, raw),
            json!(["https://a.example", "https://b.example", "https://c.example"])
        );
    }

    #[test]
    fn empty_see_also_is_empty_array() {
        assert_eq!(parse_field(SEE_ALSO, "\n \n"), json!([]));
    }
}
