//! Enumerations describing the shape of a parsed command.
//!
//! The keyword vocabulary, and the two families of sub-options (`list` and
//! `config`) kept as disjoint variants so a consumer can match on them safely.

/// The command keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Add,
    List,
    Clear,
    Done,
    Remove,
    Edit,
    Config,
    Help,
}

impl CommandKind {
    /// Look up a keyword. Expects it already lower-cased.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "add" => Some(CommandKind::Add),
            "list" => Some(CommandKind::List),
            "clear" => Some(CommandKind::Clear),
            "done" => Some(CommandKind::Done),
            "remove" => Some(CommandKind::Remove),
            "edit" => Some(CommandKind::Edit),
            "config" => Some(CommandKind::Config),
            "help" => Some(CommandKind::Help),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            CommandKind::Add => "add",
            CommandKind::List => "list",
            CommandKind::Clear => "clear",
            CommandKind::Done => "done",
            CommandKind::Remove => "remove",
            CommandKind::Edit => "edit",
            CommandKind::Config => "config",
            CommandKind::Help => "help",
        }
    }

    /// Whether `count` words (program name and keyword included) is acceptable.
    pub fn accepts_word_count(self, count: usize) -> bool {
        match self {
            CommandKind::Add => count >= 3,
            CommandKind::List => count == 2 || count == 3,
            CommandKind::Clear | CommandKind::Help => count == 2,
            CommandKind::Done | CommandKind::Remove => count == 3,
            CommandKind::Edit | CommandKind::Config => count >= 4,
        }
    }
}

/// Filter for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOption {
    Pending,
    Completed,
}

impl ListOption {
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "pending" => Some(ListOption::Pending),
            "completed" => Some(ListOption::Completed),
            _ => None,
        }
    }

    /// True if a task with the given completion flag belongs in this view.
    pub fn matches(self, done: bool) -> bool {
        match self {
            ListOption::Pending => !done,
            ListOption::Completed => done,
        }
    }
}

/// Which config field `config` writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOption {
    Path,
    Name,
}

impl ConfigOption {
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "path" => Some(ConfigOption::Path),
            "name" => Some(ConfigOption::Name),
            _ => None,
        }
    }

    /// The JSON key in the config file.
    pub fn key(self) -> &'static str {
        match self {
            ConfigOption::Path => "path",
            ConfigOption::Name => "name",
        }
    }
}

/// Sub-option carried by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandOption {
    #[default]
    None,
    List(ListOption),
    Config(ConfigOption),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup_round_trips() {
        for kind in [
            CommandKind::Add,
            CommandKind::List,
            CommandKind::Clear,
            CommandKind::Done,
            CommandKind::Remove,
            CommandKind::Edit,
            CommandKind::Config,
            CommandKind::Help,
        ] {
            assert_eq!(CommandKind::from_keyword(kind.keyword()), Some(kind));
        }
        assert_eq!(CommandKind::from_keyword("ADD"), None);
        assert_eq!(CommandKind::from_keyword("delete"), None);
    }

    #[test]
    fn test_word_counts() {
        assert!(!CommandKind::Add.accepts_word_count(2));
        assert!(CommandKind::Add.accepts_word_count(7));
        assert!(CommandKind::List.accepts_word_count(3));
        assert!(!CommandKind::List.accepts_word_count(4));
        assert!(!CommandKind::Done.accepts_word_count(4));
        assert!(!CommandKind::Edit.accepts_word_count(3));
        assert!(!CommandKind::Help.accepts_word_count(3));
    }

    #[test]
    fn test_list_option_filter() {
        assert!(ListOption::Pending.matches(false));
        assert!(!ListOption::Pending.matches(true));
        assert!(ListOption::Completed.matches(true));
    }
}
