//! The only point of truth for all information that is related to the
//! current user session in the engine. A session holds the handle to the
//! [`Database`] it drives and the command history of the user.
//!
//! The database is shared as an `Arc<RwLock<Database>>`: one lock for the
//! whole store. Readers take the read side, every mutating command takes the
//! write side for its full duration, so commands never interleave.
//!
//! At the end of the session its history is discarded.

use std::{
    collections::VecDeque,
    fmt::Display,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
    time::SystemTime,
};

use chrono::{DateTime, Local};

use crate::persistence::Database;

struct CommandHistory {
    command: String,
    command_time: SystemTime,
}

impl CommandHistory {
    pub fn command_time_string(&self) -> String {
        let datetime: DateTime<Local> = self.command_time.into();
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

impl Display for CommandHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.command_time_string(), self.command)
    }
}

pub struct Session {
    command_history: VecDeque<CommandHistory>,
    history_limit: usize,
    start_time: SystemTime,
    database: Arc<RwLock<Database>>,
}

impl Session {
    pub fn client(database: &Arc<RwLock<Database>>, history_limit: usize) -> Session {
        //! Returns a new client session driving `database`.

        Session {
            command_history: VecDeque::new(),
            history_limit,
            start_time: SystemTime::now(),
            database: Arc::clone(database),
        }
    }

    pub fn database(&self) -> Result<RwLockReadGuard<'_, Database>, String> {
        //! Lock the database for reading.

        self.database
            .read()
            .map_err(|_| "database lock poisoned by an earlier failure".to_string())
    }

    pub fn database_mut(&self) -> Result<RwLockWriteGuard<'_, Database>, String> {
        //! Lock the database for writing. The guard is held until the
        //! command completes.

        self.database
            .write()
            .map_err(|_| "database lock poisoned by an earlier failure".to_string())
    }

    pub fn add_to_command_history(&mut self, command: &str) {
        //! Record a command, forgetting the oldest one once the limit is hit.

        if self.history_limit == 0 {
            return;
        }
        if self.command_history.len() == self.history_limit {
            self.command_history.pop_front();
        }
        self.command_history.push_back(CommandHistory {
            command: command.to_string(),
            command_time: SystemTime::now(),
        });
    }

    pub fn start_time_string(&self) -> String {
        //! Convert the [`SystemTime`] object into a string representation
        //! to be more readable.

        let datetime: DateTime<Local> = self.start_time.into();
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn command_history(&self, n_prev: Option<usize>) -> Vec<String> {
        //! List the previously invoked commands, most recent first.
        //! Use `n_prev` to limit the number of commands you see.

        let limit = n_prev.unwrap_or(self.command_history.len());

        self.command_history
            .iter()
            .rev()
            .take(limit)
            .map(|command| command.to_string())
            .collect()
    }

    pub fn get_last_command(&self, nth_back: usize) -> Option<&str> {
        //! Gets the `nth_back`th last command from the history, 1 being the
        //! most recent one.

        if nth_back == 0 {
            return None;
        }

        self.command_history
            .iter()
            .nth_back(nth_back - 1)
            .map(|cmd| cmd.command.as_str())
    }
}
