use clap::Parser;
use log::debug;

use tabula_engine::{
    cli::{
        self,
        parsers::{CliMode, CliParser},
    },
    config::EngineConfig,
};

fn main() {
    // A missing .env file is fine; the environment and flags still apply.
    let dotenv = dotenvy::dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Ok(path) = dotenv {
        debug!("loaded environment from {}", path.display());
    }

    let args = CliParser::parse();
    let config = EngineConfig::from(&args);

    if config.no_color {
        colored::control::set_override(false);
    }

    match args.mode {
        CliMode::Client => cli::run_client(&config),
        CliMode::Demo => cli::run_demo(),
    }
}
