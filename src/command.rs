//! Command parser.
//!
//! Turns a raw word vector (`args[0]` is the program name, `args[1]` the
//! keyword) into a validated [`Command`]. Pure: no I/O, no printing.

use crate::error::{Result, TodoError};
use crate::fields::*;

/// One parsed, validated instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    pub option: CommandOption,
    /// Zero-based task position, for `done`, `remove` and `edit`.
    pub index: Option<usize>,
    /// Task text for `add`/`edit`, or the value for `config`.
    pub text: Option<String>,
}

impl Command {
    fn new(kind: CommandKind) -> Self {
        Command {
            kind,
            option: CommandOption::None,
            index: None,
            text: None,
        }
    }

    /// What a bare invocation with no keyword means: show every task.
    pub fn list_all() -> Self {
        Command::new(CommandKind::List)
    }
}

/// Parse the word vector of one invocation.
///
/// Only the keyword and the sub-option word are case-folded; task text keeps
/// the case it was typed in.
pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Command> {
    if args.len() < 2 {
        return Ok(Command::list_all());
    }

    let keyword = args[1].as_ref().to_lowercase();
    let kind = CommandKind::from_keyword(&keyword)
        .ok_or_else(|| TodoError::UnknownCommand(keyword.clone()))?;

    if !kind.accepts_word_count(args.len()) {
        return Err(TodoError::InvalidArgumentCount(keyword));
    }

    let mut command = Command::new(kind);
    match kind {
        CommandKind::Add => {
            command.text = Some(join_words(&args[2..]));
        }
        CommandKind::List => {
            if let Some(word) = args.get(2) {
                let word = word.as_ref().to_lowercase();
                let option = ListOption::parse(&word).ok_or_else(|| TodoError::InvalidOption {
                    command: keyword.clone(),
                    option: word.clone(),
                })?;
                command.option = CommandOption::List(option);
            }
        }
        CommandKind::Done | CommandKind::Remove => {
            command.index = Some(parse_index(args[2].as_ref())?);
        }
        CommandKind::Edit => {
            command.index = Some(parse_index(args[2].as_ref())?);
            command.text = Some(join_words(&args[3..]));
        }
        CommandKind::Config => {
            let word = args[2].as_ref().to_lowercase();
            let option = ConfigOption::parse(&word).ok_or_else(|| TodoError::InvalidOption {
                command: keyword.clone(),
                option: word.clone(),
            })?;
            command.option = CommandOption::Config(option);
            command.text = Some(join_words(&args[3..]));
        }
        CommandKind::Clear | CommandKind::Help => {}
    }

    Ok(command)
}

/// Parse a task index: ASCII digits only, no sign, must fit in `usize`.
pub fn parse_index(word: &str) -> Result<usize> {
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TodoError::InvalidIndex(word.to_string()));
    }
    word.parse::<usize>()
        .map_err(|_| TodoError::InvalidIndex(word.to_string()))
}

fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}
