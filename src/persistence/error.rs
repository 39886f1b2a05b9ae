use thiserror::Error;

use super::schema::ColumnType;
use super::value::Value;

/// Everything that can go wrong while mutating a [`super::Database`] or one of
/// its [`super::Table`]s.
///
/// Every variant is local and recoverable. An operation that returns one of these
/// has left the store exactly as it found it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("integrity violation; table '{0}' already exists")]
    DuplicateTable(String),

    #[error("does not exist: table '{0}'")]
    UnknownTable(String),

    #[error("integrity violation; column '{0}' already exists")]
    DuplicateColumn(String),

    #[error("does not exist: column '{0}'")]
    UnknownColumn(String),

    #[error("arity mismatch; expected {expected} value(s), got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("invalid {} value '{actual}' for column '{column}': not compatible with type {expected}", .actual.kind())]
    TypeMismatch {
        column: String,
        expected: ColumnType,
        actual: Value,
    },

    #[error("out of bound; row index {index} not in a table of {len} row(s)")]
    IndexOutOfRange { index: i64, len: usize },

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Failures of the text boundary, where caller supplied strings are turned
/// into typed values, column types and row positions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("invalid integer '{0}'")]
    InvalidInteger(String),

    #[error("invalid datatype '{0}': not supported, use one of str, int, bool")]
    UnknownColumnType(String),

    #[error("invalid row index '{0}'")]
    InvalidRowIndex(String),
}

pub type Result<T> = std::result::Result<T, PersistenceError>;
