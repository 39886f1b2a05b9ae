use std::fmt::Display;

use indexmap::IndexMap;

use super::schema::Schema;
use super::value::Value;

/// A single record, stored positionally in the column order of its table's
/// [`Schema`].
///
/// A row never carries its own column names. Its length is kept equal to the
/// schema length by [`super::Table`], which is what makes every row expose
/// exactly the table's columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row(pub(super) Vec<Value>);

impl Row {
    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row: Vec<String> = self.0.iter().map(|value| value.to_string()).collect();
        write!(f, "{}", row.join(" | "))
    }
}

/// A name-keyed view of a [`Row`], borrowed together with the schema it
/// belongs to.
///
/// This is how callers that think in `column -> value` mappings read rows.
/// Nothing is copied until [`RowView::to_map`] is called.
#[derive(Clone, Copy)]
pub struct RowView<'a> {
    schema: &'a Schema,
    row: &'a Row,
}

impl<'a> RowView<'a> {
    pub(super) fn new(schema: &'a Schema, row: &'a Row) -> RowView<'a> {
        RowView { schema, row }
    }

    pub fn get(&self, column_name: &str) -> Option<&'a Value> {
        self.schema
            .position(column_name)
            .and_then(|index| self.row.get(index))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.schema.column_names()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + use<'a> {
        self.schema.column_names().zip(self.row.values().iter())
    }

    pub fn row(&self) -> &'a Row {
        self.row
    }

    pub fn to_map(&self) -> IndexMap<String, Value> {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }
}
