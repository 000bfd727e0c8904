//! User-facing commands the host binds to menus and key chords.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::base::constants::{COMMAND_DISABLE, COMMAND_ENABLE, COMMAND_REFRESH, COMMAND_TOGGLE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Enable,
    Disable,
    Toggle,
    Refresh,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::Enable,
        Command::Disable,
        Command::Toggle,
        Command::Refresh,
    ];

    /// Identifier the host registers the command under.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Enable => COMMAND_ENABLE,
            Command::Disable => COMMAND_DISABLE,
            Command::Toggle => COMMAND_TOGGLE,
            Command::Refresh => COMMAND_REFRESH,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}
