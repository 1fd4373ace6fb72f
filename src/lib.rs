//! # todo_cli
//!
//! A personal task list kept in a JSON file, driven from the terminal (`todo`)
//! or from a Telegram chat (`todo-bot`).
//!
//! The moving parts:
//!
//! - [`command`]: turns the words of one invocation into a validated [`command::Command`].
//! - [`db`]: the [`db::TaskStore`], an ordered list of tasks addressed by position,
//!   loaded from and rewritten in full to its data file.
//! - [`config`]: the small config file that says where the data file lives, and
//!   first-run bootstrap.
//! - [`cmd`]: runs one command against the store; both front ends go through it.
//! - [`bot`]: the Telegram adapter.
//!
//! Data file format:
//!
//! ```json
//! [
//!     {
//!         "text": "buy milk",
//!         "done": false
//!     }
//! ]
//! ```

pub mod bot;
pub mod cli;
pub mod cmd;
pub mod command;
pub mod config;
pub mod db;
pub mod error;
pub mod fields;
pub mod logging;
pub mod task;
