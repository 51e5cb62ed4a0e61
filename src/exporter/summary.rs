//! Summary statistics for a completed export
//!
//! After the output file is written, the exporter reports what it saw:
//! total count, the distinct values of the optional `type` field, and the
//! range of the identifier field. The statistics are derived from the
//! serialized documents and are never persisted.

use std::collections::BTreeSet;

use serde_json::Value as JsonValue;

/// Derived statistics over one export's serialized documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of exported documents
    pub total: usize,

    /// Sorted distinct values of the `type` field, if any document has one
    pub card_types: Vec<String>,

    /// Minimum and maximum collected identifier, if any were found
    pub id_range: Option<(i64, i64)>,
}

impl ExportSummary {
    /// Collect statistics from serialized documents
    ///
    /// The identifier is taken from `cardId`, falling back to `id` when a
    /// document has no `cardId`; only integer-valued identifiers count
    /// toward the range. Non-string `type` values are included via their
    /// JSON rendering.
    ///
    /// # Arguments
    /// * `docs` - Serialized documents in export order
    ///
    /// # Returns
    /// * `Self` - Collected summary
    pub fn collect(docs: &[JsonValue]) -> Self {
        let mut card_types = BTreeSet::new();
        let mut card_ids = Vec::new();

        for doc in docs {
            if let Some(card_type) = doc.get("type") {
                card_types.insert(match card_type {
                    JsonValue::String(s) => s.clone(),
                    other => other.to_string(),
                });
            }

            let id_value = doc.get("cardId").or_else(|| doc.get("id"));
            if let Some(id) = id_value.and_then(JsonValue::as_i64) {
                card_ids.push(id);
            }
        }

        let id_range = match (card_ids.iter().min(), card_ids.iter().max()) {
            (Some(&min), Some(&max)) => Some((min, max)),
            _ => None,
        };

        Self {
            total: docs.len(),
            card_types: card_types.into_iter().collect(),
            id_range,
        }
    }

    /// Print the summary report to standard output
    pub fn print(&self) {
        println!();
        println!("Basic stats:");
        println!("Total cards: {}", self.total);

        if !self.card_types.is_empty() {
            println!("Card types found: {:?}", self.card_types);
        }

        if let Some((min, max)) = self.id_range {
            println!("Card ID range: {} - {}", min, max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_two_card_scenario() {
        let docs = vec![
            json!({ "_id": "a", "cardId": 5, "type": "unit" }),
            json!({ "_id": "b", "cardId": 12, "type": "building" }),
        ];

        let summary = ExportSummary::collect(&docs);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.card_types, vec!["building", "unit"]);
        assert_eq!(summary.id_range, Some((5, 12)));
    }

    #[test]
    fn test_id_fallback_to_id_field() {
        let docs = vec![
            json!({ "id": 100 }),
            json!({ "cardId": 7 }),
            json!({ "name": "no id at all" }),
        ];

        let summary = ExportSummary::collect(&docs);
        assert_eq!(summary.id_range, Some((7, 100)));
    }

    #[test]
    fn test_card_id_preferred_over_id() {
        // When both fields exist, only cardId counts for that document.
        let docs = vec![json!({ "cardId": 3, "id": 999 })];

        let summary = ExportSummary::collect(&docs);
        assert_eq!(summary.id_range, Some((3, 3)));
    }

    #[test]
    fn test_no_types_or_ids() {
        let docs = vec![json!({ "name": "Tower" })];

        let summary = ExportSummary::collect(&docs);
        assert_eq!(summary.total, 1);
        assert!(summary.card_types.is_empty());
        assert_eq!(summary.id_range, None);
    }

    #[test]
    fn test_empty_input() {
        let summary = ExportSummary::collect(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.card_types.is_empty());
        assert_eq!(summary.id_range, None);
    }

    #[test]
    fn test_duplicate_types_deduplicated() {
        let docs = vec![
            json!({ "type": "unit" }),
            json!({ "type": "unit" }),
            json!({ "type": "spell" }),
        ];

        let summary = ExportSummary::collect(&docs);
        assert_eq!(summary.card_types, vec!["spell", "unit"]);
    }

    #[test]
    fn test_non_string_type_included() {
        let docs = vec![json!({ "type": 3 })];

        let summary = ExportSummary::collect(&docs);
        assert_eq!(summary.card_types, vec!["3"]);
    }

    #[test]
    fn test_non_integer_ids_skipped() {
        let docs = vec![
            json!({ "cardId": "A-17" }),
            json!({ "cardId": 4 }),
        ];

        let summary = ExportSummary::collect(&docs);
        assert_eq!(summary.id_range, Some((4, 4)));
    }
}
