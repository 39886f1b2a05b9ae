use std::fmt::Display;

use indexmap::{IndexMap, map};
use log::debug;
use serde::Serialize;

use super::error::{PersistenceError, Result};
use super::schema::{ColumnType, Schema};
use super::table::Table;
use super::value::Value;

/// The collective of multiple [`Table`] objects, keyed by name.
///
/// A [`Database`] is a plain value. Whoever hosts it (a session, a test) owns it
/// and hands references to the code that needs it. There is no process-wide
/// instance.
///
/// Names are case-sensitive and matched exactly. Tables are kept in creation
/// order, which is the order [`Database::list_tables`] visits them in, though
/// callers should not depend on it.
///
/// The database does no locking of its own. A host that serves several callers
/// serializes the mutating calls, e.g. by wrapping the whole database in one
/// lock.
#[derive(Debug, Clone, Default)]
pub struct Database {
    tables: IndexMap<String, Table>,
}

/// Lazy iterator over the `(name, table)` pairs of a [`Database`].
///
/// A clone carries on from the same position. Calling [`Database::list_tables`]
/// again starts a fresh pass.
#[derive(Clone)]
pub struct Tables<'a> {
    inner: map::Iter<'a, String, Table>,
}

impl<'a> Iterator for Tables<'a> {
    type Item = (&'a str, &'a Table);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, table)| (name.as_str(), table))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Tables<'_> {}

/// Serializable description of one column inside a [`TableSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSnapshot {
    pub column_name: String,
    pub column_type: ColumnType,
}

/// A detached, serializable copy of a table: its name, its columns and its rows
/// as ordered `column -> value` maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSnapshot {
    pub table_name: String,
    pub column_info: Vec<ColumnSnapshot>,
    pub rows: Vec<IndexMap<String, Value>>,
}

impl TableSnapshot {
    pub fn of(table_name: &str, table: &Table) -> TableSnapshot {
        TableSnapshot {
            table_name: table_name.to_string(),
            column_info: table
                .schema()
                .get_vec()
                .iter()
                .map(|(name, column_type)| ColumnSnapshot {
                    column_name: name.clone(),
                    column_type: *column_type,
                })
                .collect(),
            rows: table.scan().map(|view| view.to_map()).collect(),
        }
    }
}

impl Database {
    pub fn new() -> Database {
        //! Create a new database with no tables.

        Database {
            tables: IndexMap::new(),
        }
    }

    pub fn with_demo_table() -> Result<Database> {
        //! Create a database holding the demo table `Table1`, duplicate row
        //! included, handy for trying out the engine.

        let mut database = Database::new();
        let table = database.create_table(
            "Table1",
            Schema::new(vec![
                ("Name".to_string(), ColumnType::Text),
                ("Age".to_string(), ColumnType::Integer),
                ("City".to_string(), ColumnType::Text),
                ("IsStudent".to_string(), ColumnType::Boolean),
            ])?,
        )?;

        let dataset: [(&str, i64, &str, bool); 4] = [
            ("Alice", 25, "New York", false),
            ("Bob", 30, "San Francisco", true),
            ("Alice", 25, "New York", false),
            ("Charlie", 22, "Los Angeles", true),
        ];
        for (name, age, city, is_student) in dataset {
            table.add_row(vec![
                Value::from(name),
                Value::from(age),
                Value::from(city),
                Value::from(is_student),
            ])?;
        }

        Ok(database)
    }

    pub fn create_table(&mut self, name: &str, schema: Schema) -> Result<&mut Table> {
        //! Register a new, empty [`Table`] with the given schema.
        //!
        //! Returns a handle to the created table so it can be filled right away.

        match self.tables.entry(name.to_string()) {
            map::Entry::Occupied(_) => Err(PersistenceError::DuplicateTable(name.to_string())),
            map::Entry::Vacant(entry) => {
                debug!("table '{}' created: {}", name, schema);
                Ok(entry.insert(Table::new(schema)))
            }
        }
    }

    pub fn drop_table(&mut self, name: &str) -> Result<Table> {
        //! Remove a table together with its schema and rows.
        //!
        //! Returns the removed table.

        let table = self
            .tables
            .shift_remove(name)
            .ok_or_else(|| PersistenceError::UnknownTable(name.to_string()))?;

        debug!("table '{}' dropped with {} row(s)", name, table.row_count());
        Ok(table)
    }

    pub fn list_tables(&self) -> Tables<'_> {
        Tables {
            inner: self.tables.iter(),
        }
    }

    pub fn get_table(&self, name: &str) -> Result<&Table> {
        self.tables
            .get(name)
            .ok_or_else(|| PersistenceError::UnknownTable(name.to_string()))
    }

    pub fn get_table_mut(&mut self, name: &str) -> Result<&mut Table> {
        self.tables
            .get_mut(name)
            .ok_or_else(|| PersistenceError::UnknownTable(name.to_string()))
    }

    pub fn get_table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn snapshot(&self, name: &str) -> Option<TableSnapshot> {
        self.tables
            .get(name)
            .map(|table| TableSnapshot::of(name, table))
    }

    pub fn snapshots(&self) -> Vec<TableSnapshot> {
        self.list_tables()
            .map(|(name, table)| TableSnapshot::of(name, table))
            .collect()
    }
}

impl Display for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, table) in self.list_tables() {
            writeln!(f, "\nTable: {}", name)?;
            write!(f, "{}", table)?;
        }
        Ok(())
    }
}
