//! JSON formatting for serialized documents
//!
//! This module renders `serde_json::Value`s for the two places the exporter
//! needs them: the output file (plain, 2-space pretty printing) and the
//! on-screen structural sample (pretty printing with optional ANSI color).

use colored_json::prelude::*;

use crate::error::{ExportError, Result};

/// JSON formatter with pretty printing support
pub struct JsonFormatter {
    /// Enable pretty printing
    pretty: bool,

    /// Indentation width in spaces
    indent: usize,

    /// Enable colored output
    use_colors: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    ///
    /// # Arguments
    /// * `pretty` - Enable pretty printing
    /// * `use_colors` - Enable colored output
    /// * `indent` - Indentation width in spaces
    ///
    /// # Returns
    /// * `Self` - New formatter
    pub fn new(pretty: bool, use_colors: bool, indent: usize) -> Self {
        Self {
            pretty,
            indent,
            use_colors,
        }
    }

    /// Format a JSON value according to this formatter's settings
    ///
    /// # Arguments
    /// * `value` - Value to format
    ///
    /// # Returns
    /// * `Result<String>` - Rendered JSON or error
    pub fn format_value<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let json_str = if self.pretty {
            self.to_pretty_string(value)?
        } else {
            serde_json::to_string(value)
                .map_err(|e| ExportError::SerializeFailed(e.to_string()))?
        };

        // Only apply colors for pretty-printed JSON
        // Compact JSON should remain as-is for piping/logging
        if self.use_colors && self.pretty {
            Ok(json_str.to_colored_json_auto().unwrap_or(json_str))
        } else {
            Ok(json_str)
        }
    }

    /// Convert a value to pretty-printed JSON with custom indentation
    ///
    /// # Arguments
    /// * `value` - The value to serialize
    ///
    /// # Returns
    /// * `Result<String>` - Pretty JSON string with custom indent
    fn to_pretty_string<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        let mut buf = Vec::new();
        let indent = " ".repeat(self.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);

        value
            .serialize(&mut ser)
            .map_err(|e| ExportError::SerializeFailed(e.to_string()))?;

        String::from_utf8(buf).map_err(|e| ExportError::SerializeFailed(e.to_string()).into())
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true, false, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_uses_two_space_indent() {
        let formatter = JsonFormatter::new(true, false, 2);
        let value = json!({ "name": "Knight", "cost": 3 });
        let result = formatter.format_value(&value).unwrap();
        assert!(result.contains("\n  \"cost\": 3"));
        assert!(!result.contains("\n    \"cost\""));
    }

    #[test]
    fn test_compact_is_single_line() {
        let formatter = JsonFormatter::new(false, false, 2);
        let value = json!({ "a": 1, "b": [1, 2, 3] });
        let result = formatter.format_value(&value).unwrap();
        assert!(!result.contains('\n'));
    }

    #[test]
    fn test_non_ascii_preserved_literally() {
        let formatter = JsonFormatter::new(true, false, 2);
        let value = json!({ "name": "Chevalier épée", "emoji": "⚔" });
        let result = formatter.format_value(&value).unwrap();
        assert!(result.contains("épée"));
        assert!(result.contains('⚔'));
        assert!(!result.contains("\\u"));
    }

    #[test]
    fn test_array_of_documents() {
        let formatter = JsonFormatter::new(true, false, 2);
        let value = json!([{ "id": 1 }, { "id": 2 }]);
        let result = formatter.format_value(&value).unwrap();
        assert!(result.starts_with('['));
        assert!(result.ends_with(']'));
    }

    #[test]
    fn test_colors_not_applied_to_compact() {
        let formatter = JsonFormatter::new(false, true, 2);
        let value = json!({ "a": 1 });
        let result = formatter.format_value(&value).unwrap();
        // Compact output stays free of escape sequences even with colors on
        assert!(!result.contains('\u{1b}'));
    }
}
