//! Command definitions
//!
//! Represents commands read by the shell.

use std::fmt;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Begin,
    Put,
    Get,
    Commit,
    Rollback,
    Status,
}

impl CommandType {
    /// Protocol verb for this command type
    pub fn verb(self) -> &'static str {
        match self {
            CommandType::Begin => "BEGIN",
            CommandType::Put => "PUT",
            CommandType::Get => "GET",
            CommandType::Commit => "COMMIT",
            CommandType::Rollback => "ROLLBACK",
            CommandType::Status => "STATUS",
        }
    }

    /// Look up a verb, ignoring ASCII case
    pub fn from_verb(verb: &str) -> Option<Self> {
        [
            CommandType::Begin,
            CommandType::Put,
            CommandType::Get,
            CommandType::Commit,
            CommandType::Rollback,
            CommandType::Status,
        ]
        .into_iter()
        .find(|ty| ty.verb().eq_ignore_ascii_case(verb))
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open a transaction
    Begin,

    /// Stage a write
    Put { key: String, value: String },

    /// Read a key (staged value first)
    Get { key: String },

    /// Apply staged writes
    Commit,

    /// Discard staged writes
    Rollback,

    /// Report the transaction state
    Status,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Begin => CommandType::Begin,
            Command::Put { .. } => CommandType::Put,
            Command::Get { .. } => CommandType::Get,
            Command::Commit => CommandType::Commit,
            Command::Rollback => CommandType::Rollback,
            Command::Status => CommandType::Status,
        }
    }
}
