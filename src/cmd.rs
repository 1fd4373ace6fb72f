//! Command implementations shared by the terminal and bot front ends.
//!
//! [`execute`] takes one parsed [`Command`] and performs exactly one store or
//! config operation, saving after every successful mutation. It returns an
//! [`Outcome`] for the caller to render; errors are passed through untouched.

use std::path::Path;

use tracing::debug;

use crate::command::Command;
use crate::config;
use crate::db::{format_tasks, TaskStore};
use crate::error::{Result, TodoError};
use crate::fields::*;

pub const HELP_TEXT: &str = "\
Todo List Manager
Usage: todo [command] [arguments]

Commands:
  add <text>          Add a new task
  list                Show all tasks
  list pending        Show pending tasks
  list completed      Show completed tasks
  clear               Clear all tasks
  done <index>        Toggle task completion status
  remove <index>      Remove a task
  edit <index> <text> Edit a task
  config path <path>  Set the path for task files
  config name <name>  Set the filename for task list
  help                Show this help message";

/// What a command produced, for the front end to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Rendered task lines; empty when no task matched.
    Listing(Vec<String>),
    /// One confirmation line.
    Message(String),
    /// The caller should show its help text.
    Help,
}

/// Run one command against the store. `config_file` is only used by `config`.
pub fn execute(command: &Command, store: &mut TaskStore, config_file: &Path) -> Result<Outcome> {
    debug!(kind = ?command.kind, option = ?command.option, index = ?command.index, "executing command");
    match command.kind {
        CommandKind::Add => cmd_add(store, text_of(command)),
        CommandKind::List => cmd_list(store, command.option),
        CommandKind::Clear => cmd_clear(store),
        CommandKind::Done => cmd_done(store, index_of(command)?),
        CommandKind::Remove => cmd_remove(store, index_of(command)?),
        CommandKind::Edit => cmd_edit(store, index_of(command)?, text_of(command)),
        CommandKind::Config => cmd_config(command, config_file),
        CommandKind::Help => Ok(Outcome::Help),
    }
}

fn index_of(command: &Command) -> Result<usize> {
    command
        .index
        .ok_or_else(|| TodoError::InvalidArgumentCount(command.kind.keyword().to_string()))
}

fn text_of(command: &Command) -> &str {
    command.text.as_deref().unwrap_or_default()
}

/// Friendlier failure before touching the store; the store checks again.
fn ensure_exists(store: &TaskStore, index: usize) -> Result<()> {
    if store.task_exists(index) {
        Ok(())
    } else {
        Err(TodoError::IndexOutOfRange {
            index,
            len: store.len(),
        })
    }
}

/// Add a new task to the list.
pub fn cmd_add(store: &mut TaskStore, text: &str) -> Result<Outcome> {
    store.add_task(text);
    store.save()?;
    Ok(Outcome::Message("Task added successfully.".into()))
}

/// List tasks, optionally only pending or only completed ones.
pub fn cmd_list(store: &TaskStore, option: CommandOption) -> Result<Outcome> {
    let filter = match option {
        CommandOption::List(f) => Some(f),
        CommandOption::None | CommandOption::Config(_) => None,
    };
    Ok(Outcome::Listing(format_tasks(store.tasks(), filter)))
}

pub fn cmd_clear(store: &mut TaskStore) -> Result<Outcome> {
    store.clear_tasks();
    store.save()?;
    Ok(Outcome::Message(format!(
        "All tasks in {} cleared successfully",
        store.data_file().display()
    )))
}

/// Toggle the completion flag of a task.
pub fn cmd_done(store: &mut TaskStore, index: usize) -> Result<Outcome> {
    ensure_exists(store, index)?;
    store.toggle_task(index)?;
    store.save()?;
    Ok(Outcome::Message("Task status toggled successfully.".into()))
}

pub fn cmd_remove(store: &mut TaskStore, index: usize) -> Result<Outcome> {
    ensure_exists(store, index)?;
    store.remove_task(index)?;
    store.save()?;
    Ok(Outcome::Message(format!(
        "Task with index {} removed successfully",
        index
    )))
}

pub fn cmd_edit(store: &mut TaskStore, index: usize, text: &str) -> Result<Outcome> {
    ensure_exists(store, index)?;
    store.edit_task(index, text)?;
    store.save()?;
    Ok(Outcome::Message(format!(
        "Task with index {} edited successfully",
        index
    )))
}

/// Write one config field. Takes effect for the next store that is opened.
pub fn cmd_config(command: &Command, config_file: &Path) -> Result<Outcome> {
    let CommandOption::Config(option) = command.option else {
        return Err(TodoError::InvalidArgumentCount(
            CommandKind::Config.keyword().to_string(),
        ));
    };
    config::set_field(option, text_of(command), config_file)?;
    let message = match option {
        ConfigOption::Path => "Path updated successfully.",
        ConfigOption::Name => "Filename updated successfully.",
    };
    Ok(Outcome::Message(message.into()))
}
