//! Runtime settings of the binary.
//!
//! Values come from the command line first, then from the environment
//! (a `.env` file in the working directory is loaded before parsing), then
//! from the defaults declared on [`CliParser`].

use crate::cli::parsers::CliParser;

pub const DEFAULT_HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Start the session with the demo table `Table1` already present.
    pub seed_demo: bool,
    pub no_color: bool,
    /// How many commands the session history keeps.
    pub history_limit: usize,
}

impl From<&CliParser> for EngineConfig {
    fn from(args: &CliParser) -> Self {
        EngineConfig {
            seed_demo: args.seed_demo,
            no_color: args.no_color,
            history_limit: args.history_limit,
        }
    }
}
