use std::fmt::Display;

use serde::Serialize;

use super::error::{PersistenceError, Result};
use super::value::Value;

/// The closed set of column kinds a [`Schema`] can declare.
///
/// Each kind owns its validator ([`ColumnType::accepts`]). Names follow the
/// short forms callers use to declare columns: `str`, `int` and `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColumnType {
    #[serde(rename = "str")]
    Text,
    #[serde(rename = "int")]
    Integer,
    #[serde(rename = "bool")]
    Boolean,
}

impl ColumnType {
    pub fn accepts(&self, value: &Value) -> bool {
        //! Check the runtime kind of `value` against this column type.
        //!
        //! The absent marker is never accepted.

        matches!(
            (self, value),
            (ColumnType::Text, Value::Text(_))
                | (ColumnType::Integer, Value::Integer(_))
                | (ColumnType::Boolean, Value::Boolean(_))
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Text => "str",
            ColumnType::Integer => "int",
            ColumnType::Boolean => "bool",
        }
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The ordered shape of a table: column names and their [`ColumnType`]s.
///
/// Order is significant. The n-th value handed to a row operation binds to the
/// n-th column, and columns display in this order. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema(Vec<(String, ColumnType)>);

impl Schema {
    pub fn new(columns: Vec<(String, ColumnType)>) -> Result<Schema> {
        //! Create a schema from a vector of column names and their types.
        //!
        //! Fails with [`PersistenceError::DuplicateColumn`] on the first name
        //! that appears twice.

        let mut schema = Schema(Vec::with_capacity(columns.len()));
        for (name, column_type) in columns {
            schema.push(name, column_type)?;
        }
        Ok(schema)
    }

    pub fn empty() -> Schema {
        Schema(Vec::new())
    }

    pub fn get(&self, index: usize) -> Option<&(String, ColumnType)> {
        //! Get schema column name and its type at the `index`.

        self.0.get(index)
    }

    pub fn get_vec(&self) -> &Vec<(String, ColumnType)> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn position(&self, column_name: &str) -> Option<usize> {
        self.0.iter().position(|(name, _)| name == column_name)
    }

    pub fn contains(&self, column_name: &str) -> bool {
        self.position(column_name).is_some()
    }

    pub fn column_type(&self, column_name: &str) -> Option<ColumnType> {
        self.0
            .iter()
            .find_map(|(name, column_type)| (name == column_name).then_some(*column_type))
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn check_arity(&self, n_values: usize) -> Result<()> {
        if n_values != self.0.len() {
            return Err(PersistenceError::ArityMismatch {
                expected: self.0.len(),
                actual: n_values,
            });
        }
        Ok(())
    }

    pub fn validate_values(&self, values: &[Value]) -> Result<()> {
        //! Validate a positional row of values against this schema.
        //!
        //! Checks arity first and then every position in order, reporting the
        //! first column whose type does not accept its value. Nothing is mutated,
        //! so callers can validate before committing anything.

        self.check_arity(values.len())?;

        for ((name, column_type), value) in self.0.iter().zip(values) {
            if !column_type.accepts(value) {
                return Err(PersistenceError::TypeMismatch {
                    column: name.clone(),
                    expected: *column_type,
                    actual: value.clone(),
                });
            }
        }

        Ok(())
    }

    pub(super) fn push(&mut self, name: String, column_type: ColumnType) -> Result<usize> {
        //! Append a column, returning its position.

        if self.contains(&name) {
            return Err(PersistenceError::DuplicateColumn(name));
        }
        self.0.push((name, column_type));
        Ok(self.0.len() - 1)
    }

    pub(super) fn remove(&mut self, column_name: &str) -> Result<usize> {
        //! Remove a column, returning the position it used to occupy.

        let index = self
            .position(column_name)
            .ok_or_else(|| PersistenceError::UnknownColumn(column_name.to_string()))?;
        self.0.remove(index);
        Ok(index)
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let schema: Vec<String> = self
            .0
            .iter()
            .map(|(col, column_type)| format!("{} ({})", col.as_str(), column_type))
            .collect();
        write!(f, "{}", schema.join(" | "))
    }
}
