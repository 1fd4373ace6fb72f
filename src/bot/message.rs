//! Telegram Bot API payloads and the inbound command extracted from them.

use serde::{Deserialize, Serialize};

/// Envelope of every Bot API response.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct GetUpdates {
    pub offset: i64,
    pub timeout: u64,
}

#[derive(Debug, Serialize)]
pub struct SendMessage<'a> {
    pub chat_id: i64,
    pub text: &'a str,
}

/// A `/keyword argument` message, reduced to what the handler needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundCommand {
    /// Lower-cased keyword without the leading `/` or any `@botname` suffix.
    pub keyword: String,
    /// Everything after the keyword, trimmed.
    pub argument: String,
    pub chat_id: i64,
}

impl InboundCommand {
    /// `None` unless the message text starts with `/` followed by a keyword.
    pub fn from_message(message: &Message) -> Option<Self> {
        let text = message.text.as_deref()?.strip_prefix('/')?;
        let (head, rest) = match text.find(char::is_whitespace) {
            Some(pos) => text.split_at(pos),
            None => (text, ""),
        };
        let keyword = head.split('@').next().unwrap_or_default().to_lowercase();
        if keyword.is_empty() {
            return None;
        }
        Some(InboundCommand {
            keyword,
            argument: rest.trim().to_string(),
            chat_id: message.chat.id,
        })
    }
}
