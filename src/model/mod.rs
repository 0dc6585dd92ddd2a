//! Data model for delimited snapshots

mod key;
mod schema;
mod table;

pub use key::IdColumn;
pub use schema::Header;
pub use table::{Row, Table};
