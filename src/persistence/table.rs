use super::error::{PersistenceError, Result};
use super::row::{Row, RowView};
use super::schema::{ColumnType, Schema};
use super::value::Value;

use std::collections::HashSet;
use std::fmt::Display;

use log::debug;

/// A [`Schema`] and the ordered rows shaped by it.
///
/// Rows have no key. A row is addressed by its position, which shifts whenever a
/// row before it is deleted. Every operation either applies completely or
/// returns an error with the table untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    schema: Schema,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(schema: Schema) -> Table {
        //! Return a new, empty table with the said schema.

        Table {
            schema,
            rows: Vec::new(),
        }
    }

    pub fn from(columns: Vec<(String, ColumnType)>) -> Result<Table> {
        //! Return a new table from a mapping of column names and their types.

        Ok(Table::new(Schema::new(columns)?))
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<RowView<'_>> {
        self.rows
            .get(index)
            .map(|row| RowView::new(&self.schema, row))
    }

    pub fn scan(&self) -> impl Iterator<Item = RowView<'_>> {
        //! Full scan over the rows in insertion order, as name-keyed views.

        self.rows.iter().map(|row| RowView::new(&self.schema, row))
    }

    pub fn checked_index(&self, index: i64) -> Result<usize> {
        //! Turn a caller supplied, possibly negative, row index into a position
        //! inside the table.

        usize::try_from(index)
            .ok()
            .filter(|&position| position < self.rows.len())
            .ok_or(PersistenceError::IndexOutOfRange {
                index,
                len: self.rows.len(),
            })
    }

    pub fn add_column(&mut self, name: &str, column_type: ColumnType) -> Result<()> {
        //! Append a column to the schema.
        //!
        //! Existing rows receive [`Value::Null`] in the new position. The new
        //! column is always last.

        self.schema.push(name.to_string(), column_type)?;
        for row in self.rows.iter_mut() {
            row.0.push(Value::Null);
        }

        debug!("column '{}' ({}) added", name, column_type);
        Ok(())
    }

    pub fn remove_column(&mut self, name: &str) -> Result<()> {
        //! Remove a column from the schema and its value from every row.

        let index = self.schema.remove(name)?;
        for row in self.rows.iter_mut() {
            row.0.remove(index);
        }

        debug!("column '{}' removed", name);
        Ok(())
    }

    pub fn add_row(&mut self, values: Vec<Value>) -> Result<()> {
        //! Insert a row of values bound positionally to the schema.
        //!
        //! Every value is validated before the row is appended, so a failure
        //! leaves no partial row behind.

        self.schema.validate_values(&values)?;
        self.rows.push(Row(values));
        Ok(())
    }

    pub fn update_row(&mut self, index: usize, values: Vec<Value>) -> Result<()> {
        //! Replace the row at `index` wholesale.

        let len = self.rows.len();
        if index >= len {
            return Err(PersistenceError::IndexOutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len,
            });
        }

        self.schema.validate_values(&values)?;
        self.rows[index] = Row(values);
        Ok(())
    }

    pub fn delete_row(&mut self, index: usize) -> Result<Row> {
        //! Remove the row at `index`, shifting every later row down by one.
        //!
        //! Returns the removed row.

        if index >= self.rows.len() {
            return Err(PersistenceError::IndexOutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len: self.rows.len(),
            });
        }

        Ok(self.rows.remove(index))
    }

    pub fn remove_duplicates(&mut self) -> usize {
        //! Keep the first occurrence of every distinct row and drop the later
        //! copies, preserving the order of the kept rows.
        //!
        //! Returns the number of rows removed.

        let before = self.rows.len();
        let mut seen: HashSet<Row> = HashSet::with_capacity(before);
        self.rows.retain(|row| seen.insert(row.clone()));

        let removed = before - self.rows.len();
        if removed > 0 {
            debug!("{} duplicate row(s) removed", removed);
        }
        removed
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = format!("{}", self.schema);
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", "-".repeat(header.chars().count()))?;

        for row in self.rows.iter() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
