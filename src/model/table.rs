//! Table and Row data structures

use csv::StringRecord;
use rustc_hash::FxHashMap;

use super::key::IdColumn;
use super::schema::Header;

/// A row of string cells, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    record: StringRecord,
}

impl Row {
    /// Take an owned copy of a record
    pub fn new(record: StringRecord) -> Self {
        Self { record }
    }

    /// Get a cell by column index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.record.get(index)
    }

    /// Number of cells in this row
    pub fn width(&self) -> usize {
        self.record.len()
    }

    pub fn record(&self) -> &StringRecord {
        &self.record
    }
}

impl<T: AsRef<str>> From<Vec<T>> for Row {
    fn from(cells: Vec<T>) -> Self {
        Self::new(StringRecord::from(cells))
    }
}

/// The baseline snapshot, indexed by identifier.
///
/// Rows need not share a width. When an identifier occurs more than once the
/// index points at its last occurrence; earlier rows with that identifier are
/// kept in `rows` but cannot be looked up.
#[derive(Debug, Clone)]
pub struct Table {
    header: Option<Header>,
    rows: Vec<Row>,
    id_column: IdColumn,
    id_index: FxHashMap<String, usize>,
}

impl Table {
    /// Create an empty table
    pub(crate) fn new(header: Option<Header>, id_column: IdColumn) -> Self {
        Self {
            header,
            rows: Vec::new(),
            id_column,
            id_index: FxHashMap::default(),
        }
    }

    /// Append a row whose identifier is `id`.
    ///
    /// Returns the position of the row previously indexed under `id`, if any.
    pub(crate) fn push_row(&mut self, id: &str, row: Row) -> Option<usize> {
        let position = self.rows.len();
        self.rows.push(row);
        self.id_index.insert(id.to_string(), position)
    }

    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn id_column(&self) -> IdColumn {
        self.id_column
    }

    /// Position of the row reachable under `id`
    pub fn row_index(&self, id: &str) -> Option<usize> {
        self.id_index.get(id).copied()
    }

    /// Identifier of a row; loaded rows always have one
    pub fn row_id<'t>(&self, row: &'t Row) -> Option<&'t str> {
        self.id_column.extract(row.record())
    }

    /// Number of rows, duplicates included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of distinct identifiers
    pub fn id_count(&self) -> usize {
        self.id_index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_last_write_wins() {
        let mut table = Table::new(None, IdColumn::new(0));
        assert_eq!(table.push_row("5", Row::from(vec!["5", "first"])), None);
        assert_eq!(table.push_row("6", Row::from(vec!["6", "other"])), None);
        assert_eq!(table.push_row("5", Row::from(vec!["5", "second"])), Some(0));

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.id_count(), 2);
        assert_eq!(table.row_index("5"), Some(2));
        assert_eq!(table.rows()[2].get(1), Some("second"));
        assert_eq!(table.row_index("7"), None);
    }

    #[test]
    fn test_row_accessors() {
        let row = Row::from(vec!["1", "Alice", "30"]);
        assert_eq!(row.width(), 3);
        assert_eq!(row.get(1), Some("Alice"));
        assert_eq!(row.get(3), None);
        assert_eq!(row.record(), &StringRecord::from(vec!["1", "Alice", "30"]));
    }
}
