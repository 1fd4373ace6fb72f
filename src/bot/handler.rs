//! Maps one inbound bot command to one reply.

use std::path::PathBuf;

use tracing::warn;

use crate::cmd::{execute, Outcome};
use crate::command::parse;
use crate::db::TaskStore;
use crate::error::TodoError;

use super::message::InboundCommand;

/// Longest task text accepted through the bot, in characters.
pub const MAX_TASK_LEN: usize = 1000;

pub const WELCOME_TEXT: &str = "\
Welcome to the Todo List bot!
I will help you manage your tasks.
Use /help to see the available commands.";

pub const BOT_HELP_TEXT: &str = "\
Available commands:
/start - Start working with the bot
/help - Show this message
/add <text> - Add a new task
/list [pending|completed] - Show tasks
/done <index> - Toggle a task between done and not done
/remove <index> - Remove a task
/edit <index> <text> - Replace the text of a task
/clear - Remove all tasks";

pub const UNKNOWN_TEXT: &str = "Unknown command. Use /help to see the available commands.";

/// Owns the task store for the lifetime of the bot.
pub struct CommandHandler {
    store: TaskStore,
    config_file: PathBuf,
}

impl CommandHandler {
    pub fn new(store: TaskStore, config_file: PathBuf) -> Self {
        CommandHandler { store, config_file }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Run one command and produce the reply text. Never fails: errors become
    /// the reply.
    pub fn handle(&mut self, inbound: &InboundCommand) -> String {
        match inbound.keyword.as_str() {
            "start" => return WELCOME_TEXT.to_string(),
            "help" => return BOT_HELP_TEXT.to_string(),
            "add" if inbound.argument.chars().count() > MAX_TASK_LEN => {
                return format!("Task text is too long (maximum {MAX_TASK_LEN} characters).");
            }
            _ => {}
        }

        let words = command_words(&inbound.keyword, &inbound.argument);
        let result = parse(&words)
            .and_then(|command| execute(&command, &mut self.store, &self.config_file));
        match result {
            Ok(outcome) => render(outcome),
            Err(TodoError::UnknownCommand(_)) => UNKNOWN_TEXT.to_string(),
            Err(e) => {
                warn!(chat_id = inbound.chat_id, keyword = %inbound.keyword, "command failed: {e}");
                format!("Error: {e}")
            }
        }
    }
}

/// Rebuild the word list the parser expects. Task text is passed through
/// as one word so newlines and repeated spaces survive.
fn command_words<'a>(keyword: &'a str, argument: &'a str) -> Vec<&'a str> {
    let mut words = vec!["todo", keyword];
    match keyword {
        "add" => words.extend(Some(argument).filter(|text| !text.is_empty())),
        "edit" | "config" => {
            let (head, rest) = argument
                .split_once(char::is_whitespace)
                .unwrap_or((argument, ""));
            words.extend(Some(head).filter(|head| !head.is_empty()));
            words.extend(Some(rest.trim_start()).filter(|rest| !rest.is_empty()));
        }
        _ => words.extend(argument.split_whitespace()),
    }
    words
}

fn render(outcome: Outcome) -> String {
    match outcome {
        Outcome::Listing(lines) if lines.is_empty() => "The task list is empty.".to_string(),
        Outcome::Listing(lines) => format!("Tasks:\n{}", lines.join("\n")),
        Outcome::Message(message) => message,
        Outcome::Help => BOT_HELP_TEXT.to_string(),
    }
}
