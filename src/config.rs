//! Configuration handling for keydiff

use crate::error::ConfigError;
use crate::model::IdColumn;

/// Output format for the diff report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// When to colour the text report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Settings shared by the baseline loader and the candidate stream.
///
/// Built once and never mutated; every field is validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    delimiter: u8,
    has_header: bool,
    id_column: IdColumn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: b'|',
            has_header: true,
            id_column: IdColumn::new(1),
        }
    }
}

impl Config {
    /// Create a config from a delimiter and a 1-based identifier column number
    pub fn new(delimiter: char, id_column: usize) -> Result<Self, ConfigError> {
        if !delimiter.is_ascii() || matches!(delimiter, '"' | '\r' | '\n') {
            return Err(ConfigError::InvalidDelimiter(delimiter));
        }
        if id_column == 0 {
            return Err(ConfigError::InvalidIdColumn(id_column));
        }
        Ok(Self {
            delimiter: delimiter as u8,
            has_header: true,
            id_column: IdColumn::new(id_column - 1),
        })
    }

    /// Set whether the first record of each file is a header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    pub fn id_column(&self) -> IdColumn {
        self.id_column
    }
}
