//! Output helpers shared by the REPL: tagged lines, highlighted arguments and
//! the success flag printed after every mutating command.

use std::fmt::Display;

use colored::Colorize;

use crate::cli::colors::{TABULA_AMBER, TABULA_TEAL};

pub fn highlight_argument(argument: impl Display) -> String {
    argument.to_string().color(TABULA_TEAL).to_string()
}

pub fn system_message(source_name: &str, message: impl Display) -> String {
    //! Prefix `message` with a bold `[source]` tag, padded so that messages
    //! from different sources line up.

    let tag = format!("{:<6}", source_name);
    format!("[{}] {}", tag.color(TABULA_TEAL).bold(), message)
}

pub fn success_flag(success: bool) -> String {
    let flag = if success {
        "true".color(TABULA_TEAL)
    } else {
        "false".color(TABULA_AMBER)
    };
    format!("success: {}", flag)
}
