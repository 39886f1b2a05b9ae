//! Banner printed when a client session opens.

use colored::*;

use crate::{cli::colors::TABULA_TEAL, config::EngineConfig};

const BANNER: &str = r"
    ████████╗ █████╗ ██████╗ ██╗   ██╗██╗      █████╗
    ╚══██╔══╝██╔══██╗██╔══██╗██║   ██║██║     ██╔══██╗
       ██║   ███████║██████╔╝██║   ██║██║     ███████║
       ██║   ██╔══██║██╔══██╗██║   ██║██║     ██╔══██║
       ██║   ██║  ██║██████╔╝╚██████╔╝███████╗██║  ██║
       ╚═╝   ╚═╝  ╚═╝╚═════╝  ╚═════╝ ╚══════╝╚═╝  ╚═╝";

pub fn splash_screen(config: &EngineConfig) {
    println!("{}", BANNER.color(TABULA_TEAL));
    println!();
    for line in session_lines(config) {
        println!("    {}", line);
    }
    println!();
}

fn session_lines(config: &EngineConfig) -> [String; 3] {
    //! The version line followed by what this session starts with.

    let store = if config.seed_demo {
        "demo table Table1"
    } else {
        "empty database"
    };

    [
        format!(
            "{} v{}",
            env!("CARGO_PKG_DESCRIPTION").color(TABULA_TEAL),
            env!("CARGO_PKG_VERSION").italic()
        ),
        format!("store    {}", store.color(TABULA_TEAL)),
        format!(
            "history  {} command(s)",
            config.history_limit.to_string().color(TABULA_TEAL)
        ),
    ]
}
