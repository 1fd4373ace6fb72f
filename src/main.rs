//! # todo - personal task list
//!
//! One process invocation per command:
//!
//! ```bash
//! todo                          # print all tasks
//! todo add buy milk             # add a task
//! todo list pending             # only unfinished tasks
//! todo done 0                   # toggle task 0
//! todo edit 0 buy oat milk      # replace the text of task 0
//! todo remove 0                 # delete task 0 (later tasks shift down)
//! todo clear                    # delete everything
//! todo config path ~/notes      # move the list for future runs
//! todo config name work.json
//! ```
//!
//! On first run `~/.todo/config/config_todo.json` is created and points at
//! `~/.todo/notepad/checklist.json`.

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing::debug;

use todo_cli::cli::Cli;
use todo_cli::cmd::{execute, Outcome, HELP_TEXT};
use todo_cli::command::parse;
use todo_cli::config::{bootstrap, Defaults};
use todo_cli::db::TaskStore;
use todo_cli::error::{Result, TodoError};
use todo_cli::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(if cli.verbose { "debug" } else { "warn" });

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "todo", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if matches!(e, TodoError::UnknownCommand(_)) {
                println!("{HELP_TEXT}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut defaults = Defaults::from_env();
    if let Some(config_file) = cli.config.as_deref() {
        defaults = defaults.with_config_file(config_file);
    }
    let config_file = defaults.config_file();
    debug!(config = %config_file.display(), "using config");

    bootstrap(&defaults)?;
    let mut store = TaskStore::open(&config_file)?;
    let command = parse(&cli.command_words())?;

    match execute(&command, &mut store, &config_file)? {
        Outcome::Listing(lines) if lines.is_empty() => println!("No tasks."),
        Outcome::Listing(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Outcome::Message(message) => println!("{message}"),
        Outcome::Help => println!("{HELP_TEXT}"),
    }
    Ok(())
}
