//! Telegram bot front end.
//!
//! The bot relays the same command vocabulary as the terminal: each inbound
//! `/keyword argument` message is parsed by [`crate::command::parse`] and run
//! through [`crate::cmd::execute`], and exactly one text reply goes back to the
//! chat it came from. Messages are handled strictly one after another, each
//! one saved before the next is looked at.

pub mod handler;
pub mod message;
pub mod telegram;

use std::future::Future;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use self::handler::CommandHandler;
use self::message::{InboundCommand, Update};
use self::telegram::TelegramClient;

/// Long-poll timeout passed to `getUpdates`.
pub const LONG_POLL_SECS: u64 = 30;
/// Pause after a failed poll before trying again.
pub const ERROR_BACKOFF: Duration = Duration::from_secs(5);

/// Handle a batch of updates in order. Returns `(chat_id, reply)` pairs and
/// advances `offset` past every update seen, command or not.
pub fn process_updates(
    handler: &mut CommandHandler,
    updates: &[Update],
    offset: &mut i64,
) -> Vec<(i64, String)> {
    let mut replies = Vec::new();
    for update in updates {
        *offset = (*offset).max(update.update_id + 1);
        let Some(inbound) = update.message.as_ref().and_then(InboundCommand::from_message) else {
            debug!(update_id = update.update_id, "skipping non-command update");
            continue;
        };
        info!(chat_id = inbound.chat_id, keyword = %inbound.keyword, "handling command");
        let reply = handler.handle(&inbound);
        replies.push((inbound.chat_id, reply));
    }
    replies
}

/// Poll forever, answering every command message.
pub async fn run_polling(
    client: &TelegramClient,
    handler: &mut CommandHandler,
    poll_interval: Duration,
) {
    info!("starting Telegram bot");
    let mut offset = 0;
    loop {
        let updates = match client.get_updates(offset, LONG_POLL_SECS).await {
            Ok(updates) => updates,
            Err(e) => {
                error!("error in bot loop: {e}");
                tokio::time::sleep(ERROR_BACKOFF).await;
                continue;
            }
        };

        for (chat_id, reply) in process_updates(handler, &updates, &mut offset) {
            if let Err(e) = client.send_message(chat_id, &reply).await {
                warn!(chat_id, "failed to send reply: {e}");
            }
        }

        tokio::time::sleep(poll_interval).await;
    }
}

/// Poll until `shutdown` completes.
pub async fn run_until<F>(
    client: &TelegramClient,
    handler: &mut CommandHandler,
    poll_interval: Duration,
    shutdown: F,
) where
    F: Future<Output = ()>,
{
    tokio::select! {
        () = run_polling(client, handler, poll_interval) => {}
        () = shutdown => info!("shutdown signal received"),
    }
    info!("Telegram bot stopped");
}
