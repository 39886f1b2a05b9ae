//! This module is where all the REPL commands are executed.
//!
//! Tabula command line syntax:
//!
//! - tabula --help | Command Line Help
//! - tabula client | Run the REPL (default).
//! - tabula demo   | Walk through the demo table and exit.
//!
//! Once the user is inside the REPL, the command parser in
//! [`crate::cli::parsers`] takes over. Every command arrives with its
//! arguments still as text; the executor resolves type names, values and row
//! indices through [`crate::conversion`] right before calling into the
//! [`crate::persistence`] engine.

use std::fmt::Display;

use thiserror::Error;

use crate::conversion::{convert_values, parse_column_type, parse_row_index};
use crate::persistence::{PersistenceError, Schema};
use crate::sessions::session::Session;

/// A parsed REPL command. Arguments are kept exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tables,
    Table {
        name: String,
    },
    Show {
        name: Option<String>,
    },
    CreateTable {
        name: String,
        columns: Vec<(String, String)>,
    },
    DropTable {
        name: String,
    },
    AddColumn {
        table: String,
        column: String,
        column_type: String,
    },
    RemoveColumn {
        table: String,
        column: String,
    },
    Insert {
        table: String,
        values: Vec<String>,
    },
    Update {
        table: String,
        index: String,
        values: Vec<String>,
    },
    Delete {
        table: String,
        index: String,
    },
    Dedup {
        table: String,
    },
}

impl Command {
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Command::Tables | Command::Table { .. } | Command::Show { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("session error: {0}")]
    Session(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// After a command runs, the REPL needs something to print.
///
/// `output` is any rendered text (a grid, a JSON document) and
/// `n_rows_processed` the number of rows a mutation touched.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub output: Option<String>,
    pub n_rows_processed: Option<usize>,
}

impl CommandResult {
    fn output(output: String) -> CommandResult {
        CommandResult {
            output: Some(output),
            n_rows_processed: None,
        }
    }

    fn processed(n_rows: usize) -> CommandResult {
        CommandResult {
            output: None,
            n_rows_processed: Some(n_rows),
        }
    }
}

impl Display for CommandResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.output {
            Some(output) => write!(f, "{}", output),
            None => write!(f, "{} row(s) processed", self.n_rows_processed.unwrap_or(0)),
        }
    }
}

/// Runs one [`Command`] against the database of a [`Session`].
///
/// Reads take the read side of the session's database lock, mutations the
/// write side, held for the whole command so a failed command cannot be
/// observed half way.
pub struct CommandExecutor<'a> {
    command: Command,
    session: &'a Session,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(command: Command, session: &'a Session) -> CommandExecutor<'a> {
        CommandExecutor { command, session }
    }

    pub fn execute(&self) -> Result<CommandResult, CommandError> {
        match &self.command {
            Command::Tables => {
                let database = self.session.database().map_err(CommandError::Session)?;
                let json = serde_json::to_string_pretty(&database.snapshots())?;
                Ok(CommandResult::output(json))
            }
            Command::Table { name } => {
                let database = self.session.database().map_err(CommandError::Session)?;
                let json = serde_json::to_string_pretty(&database.snapshot(name))?;
                Ok(CommandResult::output(json))
            }
            Command::Show { name } => {
                let database = self.session.database().map_err(CommandError::Session)?;
                let output = match name {
                    Some(name) => format!("Table: {}\n{}", name, database.get_table(name)?),
                    None => format!("{}", database),
                };
                Ok(CommandResult::output(output))
            }
            Command::CreateTable { name, columns } => {
                let columns = columns
                    .iter()
                    .map(|(column, column_type)| {
                        parse_column_type(column_type).map(|column_type| (column.clone(), column_type))
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(PersistenceError::from)?;
                let schema = Schema::new(columns)?;

                let mut database = self.session.database_mut().map_err(CommandError::Session)?;
                database.create_table(name, schema)?;
                Ok(CommandResult::processed(0))
            }
            Command::DropTable { name } => {
                let mut database = self.session.database_mut().map_err(CommandError::Session)?;
                let table = database.drop_table(name)?;
                Ok(CommandResult::processed(table.row_count()))
            }
            Command::AddColumn {
                table,
                column,
                column_type,
            } => {
                let column_type = parse_column_type(column_type).map_err(PersistenceError::from)?;

                let mut database = self.session.database_mut().map_err(CommandError::Session)?;
                let table = database.get_table_mut(table)?;
                table.add_column(column, column_type)?;
                Ok(CommandResult::processed(table.row_count()))
            }
            Command::RemoveColumn { table, column } => {
                let mut database = self.session.database_mut().map_err(CommandError::Session)?;
                let table = database.get_table_mut(table)?;
                table.remove_column(column)?;
                Ok(CommandResult::processed(table.row_count()))
            }
            Command::Insert { table, values } => {
                let mut database = self.session.database_mut().map_err(CommandError::Session)?;
                let table = database.get_table_mut(table)?;
                let values = convert_values(table.schema(), values.as_slice())?;
                table.add_row(values)?;
                Ok(CommandResult::processed(1))
            }
            Command::Update {
                table,
                index,
                values,
            } => {
                let index = parse_row_index(index).map_err(PersistenceError::from)?;

                let mut database = self.session.database_mut().map_err(CommandError::Session)?;
                let table = database.get_table_mut(table)?;
                let position = table.checked_index(index)?;
                let values = convert_values(table.schema(), values.as_slice())?;
                table.update_row(position, values)?;
                Ok(CommandResult::processed(1))
            }
            Command::Delete { table, index } => {
                let index = parse_row_index(index).map_err(PersistenceError::from)?;

                let mut database = self.session.database_mut().map_err(CommandError::Session)?;
                let table = database.get_table_mut(table)?;
                let position = table.checked_index(index)?;
                table.delete_row(position)?;
                Ok(CommandResult::processed(1))
            }
            Command::Dedup { table } => {
                let mut database = self.session.database_mut().map_err(CommandError::Session)?;
                let removed = database.get_table_mut(table)?.remove_duplicates();
                Ok(CommandResult::processed(removed))
            }
        }
    }
}
