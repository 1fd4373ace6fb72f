//! Telegram front end for the todo list.
//!
//! ```bash
//! TODO_BOT_TOKEN=123:abc todo-bot
//! ```
//!
//! Uses the same config and data files as the `todo` command.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::error;

use todo_cli::bot::handler::CommandHandler;
use todo_cli::bot::run_until;
use todo_cli::bot::telegram::TelegramClient;
use todo_cli::config::{bootstrap, Defaults};
use todo_cli::db::TaskStore;
use todo_cli::logging;

#[derive(Parser, Debug)]
#[command(name = "todo-bot", version, about = "Telegram bot for the todo list")]
struct BotCli {
    /// Bot token issued by @BotFather.
    #[arg(long, env = "TODO_BOT_TOKEN", hide_env_values = true)]
    token: String,

    /// Path to the JSON config file.
    #[arg(long, env = "TODO_CONFIG")]
    config: Option<PathBuf>,

    /// Pause between polls, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    poll_interval_ms: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = BotCli::parse();
    logging::init("info");

    let mut defaults = Defaults::from_env();
    if let Some(config_file) = cli.config.as_deref() {
        defaults = defaults.with_config_file(config_file);
    }
    let config_file = defaults.config_file();

    let store = match bootstrap(&defaults).and_then(|()| TaskStore::open(&config_file)) {
        Ok(store) => store,
        Err(e) => {
            error!("failed to open task store: {e}");
            return ExitCode::FAILURE;
        }
    };

    let client = match TelegramClient::new(&cli.token) {
        Ok(client) => client,
        Err(e) => {
            error!("failed to create HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut handler = CommandHandler::new(store, config_file);
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    };
    run_until(
        &client,
        &mut handler,
        Duration::from_millis(cli.poll_interval_ms),
        shutdown,
    )
    .await;
    ExitCode::SUCCESS
}
