//! Per-level building templates.

use serde_json::Value;

use crate::blueprint::Entry;

/// Positional field holding the column.
pub const X_FIELD: &str = "X";

/// Positional field holding the row.
pub const Y_FIELD: &str = "Y";

/// What to place in a cell quantized to one palette level.
///
/// Templates are structured entries whose `X`/`Y` fields are filled in per
/// cell; nothing is ever spliced into JSON text.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellTemplate {
    /// Place nothing.
    #[default]
    Empty,
    /// Place these buildings, all at the cell's coordinates.
    Buildings(Vec<Entry>),
}

impl CellTemplate {
    /// Build a template from raw blueprint entries.
    ///
    /// Each entry gets `X` and `Y` positional slots: an existing `X` keeps
    /// its position in the key order, a missing one is appended, then `Y`
    /// likewise. An empty list yields [`CellTemplate::Empty`].
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        if entries.is_empty() {
            return Self::Empty;
        }
        Self::Buildings(
            entries
                .into_iter()
                .map(|mut entry| {
                    entry.insert(X_FIELD.to_string(), Value::Null);
                    entry.insert(Y_FIELD.to_string(), Value::Null);
                    entry
                })
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Number of buildings placed per cell.
    pub fn entry_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Buildings(entries) => entries.len(),
        }
    }

    /// Entries for the cell at column `x`, row `y`.
    pub fn instantiate(&self, x: usize, y: usize) -> Vec<Entry> {
        match self {
            Self::Empty => Vec::new(),
            Self::Buildings(entries) => entries
                .iter()
                .map(|entry| {
                    let mut placed = entry.clone();
                    placed.insert(X_FIELD.to_string(), Value::from(x));
                    placed.insert(Y_FIELD.to_string(), Value::from(y));
                    placed
                })
                .collect(),
        }
    }

    /// Whether `entries` is exactly what this template places at `(x, y)`.
    pub fn matches(&self, entries: &[Entry], x: usize, y: usize) -> bool {
        match self {
            Self::Empty => entries.is_empty(),
            Self::Buildings(_) => self.instantiate(x, y) == entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(json: &str) -> Entry {
        serde_json::from_str(json).unwrap()
    }

    fn compact(entries: &[Entry]) -> String {
        serde_json::to_string(entries).unwrap()
    }

    #[test]
    fn test_existing_x_keeps_position_and_y_is_appended() {
        let template = CellTemplate::from_entries(vec![entry(
            r#"{"X":-6,"L":1,"T":"WireDefaultBridgeInternalVariant"}"#,
        )]);

        assert_eq!(
            compact(&template.instantiate(3, 7)),
            r#"[{"X":3,"L":1,"T":"WireDefaultBridgeInternalVariant","Y":7}]"#
        );
    }

    #[test]
    fn test_missing_x_is_appended_before_y() {
        let template =
            CellTemplate::from_entries(vec![entry(r#"{"L":2,"T":"PipeCrossInternalVariant"}"#)]);

        assert_eq!(
            compact(&template.instantiate(0, 53)),
            r#"[{"L":2,"T":"PipeCrossInternalVariant","X":0,"Y":53}]"#
        );
    }

    #[test]
    fn test_existing_y_is_overwritten_in_place() {
        let template = CellTemplate::from_entries(vec![entry(r#"{"Y":9,"X":1,"T":"A"}"#)]);
        assert_eq!(
            compact(&template.instantiate(4, 5)),
            r#"[{"Y":5,"X":4,"T":"A"}]"#
        );
    }

    #[test]
    fn test_brace_heavy_values_survive() {
        // Values that would break string templating pass through untouched
        let template = CellTemplate::from_entries(vec![entry(r#"{"T":"Sign","C":"{0}{1}{{}}"}"#)]);
        let placed = template.instantiate(1, 2);
        assert_eq!(placed[0]["C"], "{0}{1}{{}}");
        assert_eq!(placed[0]["X"], 1);
        assert_eq!(placed[0]["Y"], 2);
    }

    #[test]
    fn test_empty_template_places_nothing() {
        assert!(CellTemplate::from_entries(vec![]).is_empty());
        assert!(CellTemplate::Empty.instantiate(1, 1).is_empty());
        assert_eq!(CellTemplate::Empty.entry_count(), 0);
    }

    #[test]
    fn test_matches_requires_same_coordinates() {
        let template = CellTemplate::from_entries(vec![entry(r#"{"T":"A"}"#), entry(r#"{"T":"B"}"#)]);
        let placed = template.instantiate(2, 3);

        assert!(template.matches(&placed, 2, 3));
        assert!(!template.matches(&placed, 3, 2));
        assert!(!template.matches(&placed[..1], 2, 3));
    }
}
