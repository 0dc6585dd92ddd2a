//! Error types for keydiff

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Invalid run configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid delimiter {0:?}: expected a single ASCII character other than a quote or newline")]
    InvalidDelimiter(char),

    #[error("invalid identifier column {0}: columns are numbered from 1")]
    InvalidIdColumn(usize),
}

/// Failure while building the baseline table
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("can't read baseline: {0}")]
    FileUnreadable(#[source] csv::Error),

    #[error("can't read header from baseline: file is empty")]
    HeaderMissing,

    /// `row` is the 1-based data row; 0 is the header
    #[error("malformed baseline record #{row}: {source}")]
    MalformedRecord {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("baseline record #{row} has {width} fields, identifier column {column} is out of range")]
    IdFieldOutOfRange {
        row: usize,
        width: usize,
        column: usize,
    },
}

/// Failure while streaming the candidate file
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("can't read candidate: {0}")]
    Unreadable(#[source] csv::Error),

    #[error("can't read header from candidate: file is empty")]
    HeaderMissing,

    /// `row` is the 1-based data row; 0 is the header
    #[error("malformed candidate record #{row}: {source}")]
    MalformedRecord {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("candidate record #{row} has {width} fields, identifier column {column} is out of range")]
    IdFieldOutOfRange {
        row: usize,
        width: usize,
        column: usize,
    },
}

impl LoadError {
    /// Classify a reader error raised while producing data row `row`
    pub(crate) fn from_csv(err: csv::Error, row: usize) -> Self {
        if err.is_io_error() {
            Self::FileUnreadable(err)
        } else {
            Self::MalformedRecord { row, source: err }
        }
    }
}

impl ReadError {
    /// Classify a reader error raised while producing data row `row`
    pub(crate) fn from_csv(err: csv::Error, row: usize) -> Self {
        if err.is_io_error() {
            Self::Unreadable(err)
        } else {
            Self::MalformedRecord { row, source: err }
        }
    }
}

/// Any failure of a keydiff run
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("can't open file {path:?}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }
}
