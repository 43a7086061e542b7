// src/notify/telegram.rs
//! Telegram Bot API adapter: one `sendMessage` call per run.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;

use super::Notifier;

const API_BASE: &str = "https://api.telegram.org";

pub struct TelegramNotifier {
    api_base: String,
    token: String,
    chat_id: String,
    client: Client,
}

#[derive(Serialize)]
struct SendMessagePayload<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

impl TelegramNotifier {
    pub fn new(token: String, chat_id: String) -> Self {
        Self {
            api_base: API_BASE.to_string(),
            token,
            chat_id,
            client: Client::new(),
        }
    }

    /// Point at a different API host (tests).
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    // The token is part of the URL; keep it out of logs and errors.
    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.token)
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        let payload = SendMessagePayload {
            chat_id: &self.chat_id,
            text,
            parse_mode: "Markdown",
        };

        self.client
            .post(self.send_message_url())
            .json(&payload)
            .send()
            .await
            .context("telegram post")?
            .error_for_status()
            .context("telegram non-2xx")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_message_url_embeds_token() {
        let n = TelegramNotifier::new("123:abc".into(), "42".into())
            .with_api_base("http://127.0.0.1:9999");
        assert_eq!(
            n.send_message_url(),
            "http://127.0.0.1:9999/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn payload_serializes_markdown_mode() {
        let p = SendMessagePayload {
            chat_id: "42",
            text: "hola",
            parse_mode: "Markdown",
        };
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["chat_id"], "42");
        assert_eq!(v["parse_mode"], "Markdown");
    }
}
