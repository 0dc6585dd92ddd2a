//! keydiff - Keyed diff for delimited table snapshots
//!
//! Loads a baseline file into memory indexed by one identifier column, then
//! streams a candidate file against it, reporting added, removed, modified
//! and incompatible records along with per-field change counts.

pub mod config;
pub mod diff;
pub mod driver;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;

pub use config::Config;
pub use diff::{DiffAggregator, DiffEvent, StreamingComparator, SummaryStats};
pub use driver::{run_diff, run_files, RunOptions};
pub use error::{Error, Result};
pub use model::Table;
pub use parser::TableLoader;
