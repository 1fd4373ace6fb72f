//! Minimal async client for the Telegram Bot API.

use std::time::Duration;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::message::{ApiResponse, GetUpdates, SendMessage, Update};

const API_HOST: &str = "https://api.telegram.org";
/// Must outlast the long-poll timeout of `getUpdates`.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(45);

#[derive(Error, Debug)]
pub enum BotError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{method} returned status {status}: {body}")]
    Status {
        method: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Telegram API error in {method}: {description}")]
    Api { method: String, description: String },

    #[error("{0} response has no result")]
    MissingResult(String),
}

pub struct TelegramClient {
    client: reqwest::Client,
    base_url: String,
}

impl TelegramClient {
    pub fn new(token: &str) -> Result<Self, BotError> {
        Self::with_host(token, API_HOST)
    }

    /// Point the client at another Bot API server (e.g. a local one).
    pub fn with_host(token: &str, host: &str) -> Result<Self, BotError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self::with_client(client, token, host))
    }

    /// Use a preconfigured HTTP client.
    pub fn with_client(client: reqwest::Client, token: &str, host: &str) -> Self {
        TelegramClient {
            client,
            base_url: format!("{}/bot{}", host.trim_end_matches('/'), token),
        }
    }

    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>, BotError> {
        let payload = GetUpdates {
            offset,
            timeout: timeout_secs,
        };
        self.call("getUpdates", &payload).await
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), BotError> {
        let payload = SendMessage { chat_id, text };
        let _: IgnoredAny = self.call("sendMessage", &payload).await?;
        Ok(())
    }

    async fn call<P, R>(&self, method: &str, payload: &P) -> Result<R, BotError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(method, "calling Telegram API");
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, method))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BotError::Status {
                method: method.to_string(),
                status,
                body,
            });
        }

        let envelope: ApiResponse<R> = response.json().await?;
        if !envelope.ok {
            return Err(BotError::Api {
                method: method.to_string(),
                description: envelope
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }
        envelope
            .result
            .ok_or_else(|| BotError::MissingResult(method.to_string()))
    }
}
