//! Identifier column handling

use csv::StringRecord;

/// The single column whose value names a record across both files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdColumn {
    index: usize,
}

impl IdColumn {
    /// Create an identifier column from a 0-based index
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// 0-based position
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based column number, as the user spells it
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Read the identifier out of a record, `None` if the record is too narrow
    pub fn extract<'r>(&self, record: &'r StringRecord) -> Option<&'r str> {
        record.get(self.index)
    }
}
