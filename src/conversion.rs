//! The text boundary of the engine.
//!
//! Callers outside the crate (the REPL, a remote API) speak in strings. The
//! functions here turn those strings into the typed pieces the persistence
//! layer works with:
//!
//! - [`parse_column_type`] resolves a type name through a fixed lookup table.
//! - [`convert_value`] and [`convert_values`] turn cell text into [`Value`]s.
//! - [`parse_row_index`] reads a signed row index.
//!
//! Nothing in [`crate::persistence`] calls into this module.

use crate::persistence::{ColumnType, ConversionError, PersistenceError, Schema, Value};

/// Every type name a caller may use, and the column type it stands for.
const COLUMN_TYPE_NAMES: [(&str, ColumnType); 6] = [
    ("str", ColumnType::Text),
    ("text", ColumnType::Text),
    ("int", ColumnType::Integer),
    ("integer", ColumnType::Integer),
    ("bool", ColumnType::Boolean),
    ("boolean", ColumnType::Boolean),
];

pub fn parse_column_type(name: &str) -> Result<ColumnType, ConversionError> {
    //! Resolve a type name like `int` into its [`ColumnType`].
    //!
    //! Only the names in the lookup table are understood, in lowercase.

    let name = name.trim();
    COLUMN_TYPE_NAMES
        .iter()
        .find_map(|(known, column_type)| (*known == name).then_some(*column_type))
        .ok_or_else(|| ConversionError::UnknownColumnType(name.to_string()))
}

pub fn convert_value(column_type: ColumnType, text: &str) -> Result<Value, ConversionError> {
    //! Convert one piece of text into a value of `column_type`.
    //!
    //! - Text is taken as is.
    //! - Integers are parsed in base 10, surrounding whitespace ignored.
    //! - Booleans are `true` when the trimmed text is `true` in any casing and
    //!   `false` for anything else. This never fails, so a typo like `yse`
    //!   quietly becomes `false`.

    match column_type {
        ColumnType::Text => Ok(Value::Text(text.to_string())),
        ColumnType::Integer => text
            .trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| ConversionError::InvalidInteger(text.to_string())),
        ColumnType::Boolean => Ok(Value::Boolean(text.trim().eq_ignore_ascii_case("true"))),
    }
}

pub fn convert_values<S: AsRef<str>>(
    schema: &Schema,
    values: &[S],
) -> Result<Vec<Value>, PersistenceError> {
    //! Convert a whole row of text, position by position, using the column types
    //! of `schema`.
    //!
    //! The arity is checked before anything is converted, so a short row reports
    //! [`PersistenceError::ArityMismatch`] rather than a conversion failure.

    schema.check_arity(values.len())?;

    schema
        .get_vec()
        .iter()
        .zip(values)
        .map(|((_, column_type), text)| {
            convert_value(*column_type, text.as_ref()).map_err(PersistenceError::from)
        })
        .collect()
}

pub fn parse_row_index(text: &str) -> Result<i64, ConversionError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ConversionError::InvalidRowIndex(text.to_string()))
}
