use std::fmt::Display;

use serde::Serialize;

/// A single typed cell of a [`super::Row`].
///
/// [`Value::Null`] is the absent marker that fills existing rows when a column is
/// added to a table. It is not a value of any [`super::ColumnType`], so it never
/// passes row validation and can only appear through schema evolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Text(String),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        //! Name of the runtime kind, used in diagnostics.

        match self {
            Value::Null => "null",
            Value::Text(_) => "str",
            Value::Integer(_) => "int",
            Value::Boolean(_) => "bool",
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Text(text) => write!(f, "{}", text),
            Value::Integer(number) => write!(f, "{}", number),
            Value::Boolean(flag) => write!(f, "{}", flag),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}
