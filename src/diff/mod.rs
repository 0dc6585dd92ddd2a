//! Keyed diff engine: comparing a candidate stream against a baseline table

pub mod field_diff;
mod stats;
mod stream;

use serde::{Serialize, Serializer};

pub use field_diff::diff_fields;
pub use stats::{DiffAggregator, SummaryStats};
pub use stream::StreamingComparator;

/// Name under which a column's changes are reported and tallied
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldLabel {
    /// Both files name the column the same way
    Same(String),
    /// The column is named differently in the two files
    Renamed { left: String, right: String },
}

impl FieldLabel {
    /// Label from the names each side gives the column
    pub fn new(left: &str, right: &str) -> Self {
        if left == right {
            FieldLabel::Same(left.to_string())
        } else {
            FieldLabel::Renamed {
                left: left.to_string(),
                right: right.to_string(),
            }
        }
    }
}

impl std::fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldLabel::Same(name) => write!(f, "{}", name),
            FieldLabel::Renamed { left, right } => write!(f, "{} - {}", left, right),
        }
    }
}

impl Serialize for FieldLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single differing column of a matched row pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    pub label: FieldLabel,
    pub left_value: String,
    pub right_value: String,
}

/// Outcome of classifying one candidate row, or one unseen baseline row.
///
/// Row numbers are 1-based data-row positions; a header row is not counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiffEvent {
    /// Candidate row whose identifier is not in the baseline
    Added { id: String, row_number: usize },
    /// Baseline row whose identifier never appeared in the candidate
    Removed { id: String, row_number: usize },
    /// Matched rows of equal width with at least one differing column
    Modified {
        left_row_number: usize,
        right_row_number: usize,
        id: String,
        field_changes: Vec<FieldChange>,
    },
    /// Matched rows of different width; columns are not compared
    Incompatible {
        left_row_number: usize,
        right_row_number: usize,
        id: String,
        left_width: usize,
        right_width: usize,
    },
}
