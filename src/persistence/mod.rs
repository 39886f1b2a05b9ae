//! Persistence as tables needs to have the following components
//! - Schema (ordered mapping of column names to the types allowed in them)
//! - Row (positional values, always as long as the schema of its table)
//! - Table (a schema and the rows shaped by it)
//! - Database (named tables, created and dropped as a whole)
//!
//! Everything lives in memory. Nothing here parses text; turning caller input
//! into [`Value`]s is the job of [`crate::conversion`].

//  All modules of this lib
mod database;
mod error;
mod row;
mod schema;
mod table;
mod value;

//  External API
pub use database::{ColumnSnapshot, Database, TableSnapshot, Tables};
pub use error::{ConversionError, PersistenceError, Result};
pub use row::{Row, RowView};
pub use schema::{ColumnType, Schema};
pub use table::Table;
pub use value::Value;
