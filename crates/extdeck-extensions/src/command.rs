//! Commands the UI boundary can issue against the controller

use extdeck_core::Filter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A user-initiated command
///
/// Cards carry their remove/toggle commands so that whatever binds UI
/// controls can dispatch them without knowing about the controller's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "arg", rename_all = "kebab-case")]
pub enum Command {
    /// Change the filter selection
    SetFilter(Filter),
    /// Flip `is_active` of the record with this id
    Toggle(usize),
    /// Remove the record with this id (after confirmation)
    Remove(usize),
}

/// Failure to parse a typed command line
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("'{command}' needs an argument: {usage}")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },

    #[error("Invalid extension id '{0}': expected a non-negative number")]
    InvalidId(String),

    #[error("{0}")]
    InvalidFilter(String),
}

impl FromStr for Command {
    type Err = CommandParseError;

    /// Accepts `all`, `active`, `inactive`, `filter <f>`, `toggle <id>`
    /// and `remove <id>`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let head = words.next().ok_or(CommandParseError::Empty)?;
        let arg = words.next();

        match head.to_ascii_lowercase().as_str() {
            "all" | "active" | "inactive" => parse_filter(head).map(Command::SetFilter),
            "filter" | "f" => {
                let value = arg.ok_or(CommandParseError::MissingArgument {
                    command: "filter",
                    usage: "filter <all|active|inactive>",
                })?;
                parse_filter(value).map(Command::SetFilter)
            }
            "toggle" | "t" => {
                let id = arg.ok_or(CommandParseError::MissingArgument {
                    command: "toggle",
                    usage: "toggle <id>",
                })?;
                parse_id(id).map(Command::Toggle)
            }
            "remove" | "rm" => {
                let id = arg.ok_or(CommandParseError::MissingArgument {
                    command: "remove",
                    usage: "remove <id>",
                })?;
                parse_id(id).map(Command::Remove)
            }
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SetFilter(filter) => write!(f, "filter {}", filter),
            Command::Toggle(id) => write!(f, "toggle {}", id),
            Command::Remove(id) => write!(f, "remove {}", id),
        }
    }
}

fn parse_filter(value: &str) -> Result<Filter, CommandParseError> {
    value
        .parse()
        .map_err(|e: extdeck_core::Error| CommandParseError::InvalidFilter(e.to_string()))
}

fn parse_id(value: &str) -> Result<usize, CommandParseError> {
    value
        .parse()
        .map_err(|_| CommandParseError::InvalidId(value.to_string()))
}
