use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

/// Simple, file-backed todo list.
/// Storage location is read from a small JSON config file (~/.todo/config by default).
#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "Personal task list manager")]
pub struct Cli {
    /// Path to the JSON config file.
    #[arg(long, env = "TODO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print debug diagnostics to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Command and its arguments, e.g. `add buy milk` or `done 2`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub words: Vec<String>,
}

impl Cli {
    /// The word vector the command parser expects: program name first.
    pub fn command_words(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.words.len() + 1);
        args.push("todo".to_string());
        args.extend(self.words.iter().cloned());
        args
    }
}
