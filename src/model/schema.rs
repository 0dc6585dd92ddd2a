//! Header names and their positions

use csv::StringRecord;
use indexmap::IndexMap;
use log::warn;

/// Header row of a delimited file, mapping names to positions and back
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
    positions: IndexMap<String, usize>,
}

impl Header {
    /// Build from a header record.
    ///
    /// A repeated name maps to its last position; the earlier column keeps its
    /// name for positional lookups.
    pub fn from_record(record: &StringRecord) -> Self {
        let mut header = Self::default();
        for (index, name) in record.iter().enumerate() {
            if let Some(previous) = header.positions.insert(name.to_string(), index) {
                warn!(
                    "Duplicate header {:?} at columns {} and {}; using column {}",
                    name,
                    previous + 1,
                    index + 1,
                    index + 1
                );
            }
            header.names.push(name.to_string());
        }
        header
    }

    /// Name of the column at `index`
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Position of the column called `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }
}
