//! Error type shared by the command parser, the task store and the config layer.
//!
//! Nothing in the library recovers from its own errors: every failure travels
//! up to the front end (terminal or bot), which turns it into a message.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while parsing or executing a command.
#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid count of arguments for command - {0}.")]
    InvalidArgumentCount(String),

    #[error("Invalid task index ({0}): expected a non-negative number")]
    InvalidIndex(String),

    #[error("Unknown {command} option - {option}")]
    InvalidOption { command: String, option: String },

    #[error("Task with index {index} does not exist (list has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Malformed file {}: {reason}", .path.display())]
    InvalidFormat { path: PathBuf, reason: String },

    #[error("Failed to open config file {}: {source}", .path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TodoError>;

impl TodoError {
    pub fn invalid_format(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        TodoError::InvalidFormat {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TodoError::Persistence {
            path: path.into(),
            source,
        }
    }
}
