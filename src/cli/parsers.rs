//! The place where the CLI argument parser and the REPL command parser are
//! defined.
//!
//! The REPL grammar is line based, one command per line:
//!
//! - `tables` | `table <name>` | `show [<name>]`
//! - `create <name> <col>:<type>, ...` | `drop <name>`
//! - `add-column <table> <col>:<type>` | `remove-column <table> <col>`
//! - `insert <table> <value>, ...` | `update <table> <index> <value>, ...`
//! - `delete <table> <index>` | `dedup <table>`
//!
//! Values are separated by commas. Wrap a value in double quotes to keep
//! commas or surrounding spaces in it, and double a quote to escape it.

use clap::{Parser, ValueEnum};

use crate::cli::commands::{Command, CommandError};
use crate::config::DEFAULT_HISTORY_LIMIT;

#[derive(Parser)]
#[command(name = "tabula")]
#[command(about = "An in-memory, schema-typed table store", long_about = None)]
pub struct CliParser {
    /// Either open the interactive client or run the demo walkthrough.
    #[arg(value_enum, default_value_t = CliMode::Client)]
    pub mode: CliMode,

    /// Start with the demo table `Table1` loaded.
    #[arg(long, env = "TABULA_SEED_DEMO")]
    pub seed_demo: bool,

    /// Disable colored output.
    #[arg(long, env = "TABULA_NO_COLOR")]
    pub no_color: bool,

    /// Number of commands kept in the session history.
    #[arg(long, env = "TABULA_HISTORY_LIMIT", default_value_t = DEFAULT_HISTORY_LIMIT)]
    pub history_limit: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CliMode {
    // Start a REPL client instance.
    Client,

    // Print the demo table before and after removing its duplicates.
    Demo,
}

fn next_word(text: &str) -> Option<(&str, &str)> {
    //! Split off the first whitespace separated word.

    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }

    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => Some((word, rest)),
        None => Some((text, "")),
    }
}

fn expect_word<'a>(text: &'a str, what: &str, usage: &str) -> Result<(&'a str, &'a str), CommandError> {
    next_word(text).ok_or_else(|| CommandError::Parse(format!("missing {}; usage: {}", what, usage)))
}

fn expect_end(text: &str, usage: &str) -> Result<(), CommandError> {
    if text.trim().is_empty() {
        Ok(())
    } else {
        Err(CommandError::Parse(format!(
            "unexpected '{}'; usage: {}",
            text.trim(),
            usage
        )))
    }
}

fn parse_column_definition(definition: &str) -> Result<(String, String), CommandError> {
    //! Split `name:type` into its two halves. The type name is resolved later,
    //! by the executor.

    match definition.split_once(':') {
        Some((name, column_type)) if !name.trim().is_empty() && !column_type.trim().is_empty() => {
            Ok((name.trim().to_string(), column_type.trim().to_string()))
        }
        _ => Err(CommandError::Parse(format!(
            "invalid column definition '{}'; expected <name>:<type>",
            definition
        ))),
    }
}

pub fn split_values(text: &str) -> Result<Vec<String>, CommandError> {
    //! Split a comma separated list of values.
    //!
    //! Unquoted values are trimmed. Quoted values are kept verbatim, with `""`
    //! standing for a single quote. An empty list gives no values.

    let text = text.trim();
    if text.is_empty() {
        return Ok(vec![]);
    }

    let mut values = Vec::new();
    let mut chars = text.chars().peekable();

    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        let value = if chars.peek() == Some(&'"') {
            chars.next();

            let mut value = String::new();
            let mut closed = false;
            while let Some(c) = chars.next() {
                if c != '"' {
                    value.push(c);
                } else if chars.peek() == Some(&'"') {
                    chars.next();
                    value.push('"');
                } else {
                    closed = true;
                    break;
                }
            }

            if !closed {
                return Err(CommandError::Parse(format!(
                    "unterminated quoted value \"{}",
                    value
                )));
            }

            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
            if let Some(&c) = chars.peek() {
                if c != ',' {
                    return Err(CommandError::Parse(format!(
                        "unexpected '{}' after quoted value \"{}\"",
                        c, value
                    )));
                }
            }

            value
        } else {
            let mut value = String::new();
            while let Some(&c) = chars.peek() {
                if c == ',' {
                    break;
                }
                value.push(c);
                chars.next();
            }
            value.trim().to_string()
        };

        values.push(value);

        // Only a comma or the end of input can follow a value here.
        if chars.next().is_none() {
            break;
        }
    }

    Ok(values)
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    //! Parse a single REPL line into a [`Command`].

    let (keyword, rest) = next_word(line)
        .ok_or_else(|| CommandError::Parse("empty command".to_string()))?;

    match keyword.to_lowercase().as_str() {
        "tables" => {
            expect_end(rest, "tables")?;
            Ok(Command::Tables)
        }
        "table" => {
            let usage = "table <name>";
            let (name, rest) = expect_word(rest, "table name", usage)?;
            expect_end(rest, usage)?;
            Ok(Command::Table {
                name: name.to_string(),
            })
        }
        "show" => match next_word(rest) {
            Some((name, rest)) => {
                expect_end(rest, "show [<name>]")?;
                Ok(Command::Show {
                    name: Some(name.to_string()),
                })
            }
            None => Ok(Command::Show { name: None }),
        },
        "create" => {
            let (name, rest) = expect_word(rest, "table name", "create <name> <col>:<type>, ...")?;
            let columns = split_values(rest)?
                .iter()
                .map(|definition| parse_column_definition(definition))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Command::CreateTable {
                name: name.to_string(),
                columns,
            })
        }
        "drop" => {
            let usage = "drop <name>";
            let (name, rest) = expect_word(rest, "table name", usage)?;
            expect_end(rest, usage)?;
            Ok(Command::DropTable {
                name: name.to_string(),
            })
        }
        "add-column" => {
            let usage = "add-column <table> <col>:<type>";
            let (table, rest) = expect_word(rest, "table name", usage)?;
            let (definition, rest) = expect_word(rest, "column definition", usage)?;
            expect_end(rest, usage)?;
            let (column, column_type) = parse_column_definition(definition)?;
            Ok(Command::AddColumn {
                table: table.to_string(),
                column,
                column_type,
            })
        }
        "remove-column" => {
            let usage = "remove-column <table> <col>";
            let (table, rest) = expect_word(rest, "table name", usage)?;
            let (column, rest) = expect_word(rest, "column name", usage)?;
            expect_end(rest, usage)?;
            Ok(Command::RemoveColumn {
                table: table.to_string(),
                column: column.to_string(),
            })
        }
        "insert" => {
            let (table, rest) = expect_word(rest, "table name", "insert <table> <value>, ...")?;
            Ok(Command::Insert {
                table: table.to_string(),
                values: split_values(rest)?,
            })
        }
        "update" => {
            let usage = "update <table> <index> <value>, ...";
            let (table, rest) = expect_word(rest, "table name", usage)?;
            let (index, rest) = expect_word(rest, "row index", usage)?;
            Ok(Command::Update {
                table: table.to_string(),
                index: index.to_string(),
                values: split_values(rest)?,
            })
        }
        "delete" => {
            let usage = "delete <table> <index>";
            let (table, rest) = expect_word(rest, "table name", usage)?;
            let (index, rest) = expect_word(rest, "row index", usage)?;
            expect_end(rest, usage)?;
            Ok(Command::Delete {
                table: table.to_string(),
                index: index.to_string(),
            })
        }
        "dedup" => {
            let usage = "dedup <table>";
            let (table, rest) = expect_word(rest, "table name", usage)?;
            expect_end(rest, usage)?;
            Ok(Command::Dedup {
                table: table.to_string(),
            })
        }
        other => Err(CommandError::Parse(format!(
            "unknown command '{}'; try 'help'",
            other
        ))),
    }
}
