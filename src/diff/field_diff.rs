//! Positional comparison of two rows of equal width

use csv::StringRecord;

use crate::model::Header;

use super::{FieldChange, FieldLabel};

/// Name a side gives column `index`, falling back to its 1-based number
fn column_name(header: Option<&Header>, index: usize) -> String {
    header
        .and_then(|h| h.name(index))
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", index + 1))
}

/// Label for column `index` given both sides' headers
pub fn field_label(left: Option<&Header>, right: Option<&Header>, index: usize) -> FieldLabel {
    FieldLabel::new(&column_name(left, index), &column_name(right, index))
}

/// Compare `left` and `right` column by column.
///
/// Returns one owned change per differing position, in column order. Callers
/// check widths first; extra cells on either side are ignored.
pub fn diff_fields(
    left: &StringRecord,
    right: &StringRecord,
    left_header: Option<&Header>,
    right_header: Option<&Header>,
) -> Vec<FieldChange> {
    left.iter()
        .zip(right.iter())
        .enumerate()
        .filter(|(_, (l, r))| l != r)
        .map(|(index, (l, r))| FieldChange {
            label: field_label(left_header, right_header, index),
            left_value: l.to_string(),
            right_value: r.to_string(),
        })
        .collect()
}
