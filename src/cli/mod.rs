use std::{
    io::{self, Write},
    sync::{Arc, RwLock},
};

use colored::Colorize;
use log::{error, info, warn};

use crate::{
    cli::{
        colors::TABULA_TEAL,
        commands::{CommandExecutor, CommandResult},
        messages::{highlight_argument, success_flag, system_message},
        parsers::parse_command,
    },
    config::EngineConfig,
    persistence::Database,
    sessions::session::Session,
};

mod colors;
pub mod commands;
mod messages;
pub mod parsers;
mod splash_screen;

pub use commands::{Command, CommandError};

const DEFAULT_LAST_COMMAND_DELIMITER: &str = "!";

const TABULA_ENGINE_COMMANDS_LIST: [(&str, &str); 15] = [
    ("tables", "every table as json"),
    ("table", "<name>; one table as json"),
    ("show", "[<name>]; tables as a grid"),
    ("create", "<name> <col>:<type>, ...; types are str, int, bool"),
    ("drop", "<name>; drop a table"),
    ("add-column", "<table> <col>:<type>; existing rows get NULL"),
    ("remove-column", "<table> <col>"),
    ("insert", "<table> <value>, ...; one value per column, \"\" for empty text"),
    ("update", "<table> <index> <value>, ...; replace a row"),
    ("delete", "<table> <index>; later rows shift down"),
    ("dedup", "<table>; drop repeated rows, keep the first"),
    ("!", "execute the last command, add more to go further back"),
    ("help", "list all available commands"),
    ("history", "list command history for this session"),
    ("quit", "leave the session; the tables go with it"),
];

fn build_database(config: &EngineConfig) -> Database {
    //! Build the database the session will drive, seeded with the demo table
    //! when asked to.

    if !config.seed_demo {
        return Database::new();
    }

    match Database::with_demo_table() {
        Ok(database) => database,
        Err(err) => {
            error!("could not seed the demo table: {}", err);
            Database::new()
        }
    }
}

pub fn run_client(config: &EngineConfig) {
    splash_screen::splash_screen(config);

    let database = Arc::new(RwLock::new(build_database(config)));
    let session = Session::client(&database, config.history_limit);

    start_repl(session);
}

pub fn run_demo() {
    //! Print the demo table, remove its duplicates, and print it again, both as
    //! a grid and as json.

    let mut database = match Database::with_demo_table() {
        Ok(database) => database,
        Err(err) => {
            error!("could not build the demo table: {}", err);
            return;
        }
    };

    println!("{}", database);

    match database.get_table_mut("Table1") {
        Ok(table) => {
            let removed = table.remove_duplicates();
            println!(
                "{}",
                system_message("tabula", format!("{} duplicate row(s) removed.", removed))
            );
        }
        Err(err) => {
            error!("{}", err);
            return;
        }
    }

    println!("{}", database);
    match serde_json::to_string_pretty(&database.snapshots()) {
        Ok(json) => println!("{}", json),
        Err(err) => error!("could not serialize the demo table: {}", err),
    }
}

pub fn show_help() {
    println!(
        "{}",
        system_message(
            "info",
            format!(
                "Values are comma separated, {} keeps commas and spaces.",
                highlight_argument("\"quoting\"")
            )
        )
    );

    println!();
    println!("{:14} {}", "COMMAND".color(TABULA_TEAL), "DETAILS");
    for (command, details) in TABULA_ENGINE_COMMANDS_LIST {
        println!("{:14} {}", command.color(TABULA_TEAL), details)
    }
}

fn report(result: &CommandResult) {
    if result.output.is_some() {
        println!("{}", result);
    } else {
        println!("{}", system_message("tabula", format!("{}!", result)));
    }
}

fn start_repl(mut session: Session) {
    println!(
        "{}",
        system_message(
            "system",
            format!(
                "Use '{}' to leave and '{}' to know all commands available.",
                highlight_argument("quit"),
                highlight_argument("help"),
            ),
        )
    );
    println!(
        "{}",
        system_message(
            "system",
            format!(
                "New session initiated at '{}'.",
                highlight_argument(&session.start_time_string())
            ),
        )
    );

    loop {
        println!();
        print!("{:6} > ", "tabula".color(TABULA_TEAL).bold());
        if let Err(err) = io::stdout().flush() {
            error!("could not flush stdout: {}", err);
            break;
        }

        let mut buffer = String::new();
        match io::stdin().read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                error!("could not read from stdin: {}", err);
                break;
            }
        }

        if buffer.starts_with(DEFAULT_LAST_COMMAND_DELIMITER) {
            let last = buffer.matches(DEFAULT_LAST_COMMAND_DELIMITER).count();

            match session.get_last_command(last) {
                Some(command) => buffer = command.to_string(),
                None => {
                    println!(
                        "{}",
                        system_message(
                            "system",
                            format!(
                                "No command {} steps back.",
                                highlight_argument(&last.to_string())
                            ),
                        )
                    );
                    continue;
                }
            }
        }

        let line = buffer.trim();
        if line.is_empty() {
            continue;
        }
        session.add_to_command_history(line);

        match line {
            "history" => {
                for (index, command) in session.command_history(None).iter().enumerate() {
                    println!("{:3} | {}", index, command);
                }
            }
            "help" => show_help(),
            "quit" | "exit" => break,
            command_line => {
                info!("executing '{}'", command_line);

                match parse_command(command_line) {
                    Ok(command) => {
                        let is_mutation = command.is_mutation();
                        match CommandExecutor::new(command, &session).execute() {
                            Ok(result) => {
                                report(&result);
                                if is_mutation {
                                    println!("{}", success_flag(true));
                                }
                            }
                            Err(err) => {
                                warn!("command '{}' failed: {}", command_line, err);
                                println!("{}", system_message("tabula", err.to_string()));
                                if is_mutation {
                                    println!("{}", success_flag(false));
                                }
                            }
                        }
                    }
                    Err(err) => {
                        warn!("command '{}' rejected: {}", command_line, err);
                        println!("{}", system_message("parser", err.to_string()));
                    }
                }
            }
        }
    }

    println!("Goodbye!")
}
