//! Telegram Bot API notifier.
//!
//! Delivery failures never cross this boundary: every public operation
//! logs what happened and reports success as a bool.

use crate::error::DeliveryError;
use crate::models::signal::SignalBatch;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{error, info};

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
const SEND_TIMEOUT: Duration = Duration::from_secs(30);
const IDENTITY_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TelegramNotifier {
    client: Client,
    chat_id: String,
    /// `{base}/bot{token}`, kept pre-joined so request paths stay simple.
    bot_url: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: &str, chat_id: &str) -> Self {
        Self::with_api_base(TELEGRAM_API_BASE, bot_token, chat_id)
    }

    /// Point the notifier at an alternate API host. Tests use this to inject
    /// a mock server.
    pub fn with_api_base(api_base: &str, bot_token: &str, chat_id: &str) -> Self {
        Self {
            client: Client::new(),
            chat_id: chat_id.to_string(),
            bot_url: format!("{}/bot{}", api_base, bot_token),
        }
    }

    async fn post_message(&self, text: &str) -> Result<(), DeliveryError> {
        let payload = json!({
            "chat_id": self.chat_id,
            "text": text,
            "parse_mode": "Markdown",
            "disable_web_page_preview": true,
        });

        let response = self
            .client
            .post(format!("{}/sendMessage", self.bot_url))
            .timeout(SEND_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }

    /// Send raw text to the configured chat. Any transport error, timeout,
    /// or non-success status is logged and reported as false.
    pub async fn send_message(&self, text: &str) -> bool {
        match self.post_message(text).await {
            Ok(()) => {
                info!("Message sent successfully to Telegram");
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to send message to Telegram");
                false
            }
        }
    }

    /// Prepend the alert header to a formatted signal summary and send it.
    pub async fn send_signal_message(&self, batch: &SignalBatch, formatted: &str) -> bool {
        let header = format!(
            "🚀 *AI Trading Signals Alert*\n⏰ {}\n\n",
            Utc::now().format("%d/%m/%Y %H:%M:%S")
        );
        let success = self.send_message(&format!("{}{}", header, formatted)).await;
        if success {
            info!(
                symbol_count = batch.len(),
                "Signal message sent successfully for {} symbols",
                batch.len()
            );
        }
        success
    }

    /// Best-effort error side channel. Its own failure is logged by
    /// send_message and never escalated.
    pub async fn send_error_notification(&self, error_msg: &str) -> bool {
        let message = format!(
            "🚨 *AI Signal Bot Error*\n\n❌ Error: {}\n⏰ Time: {}\n\nPlease check the bot logs for more details.",
            error_msg,
            Utc::now().format("%d/%m/%Y %H:%M:%S")
        );
        self.send_message(&message).await
    }

    /// Verify credentials against getMe. True only when the call succeeds
    /// and the bot identity resolves.
    pub async fn test_connection(&self) -> bool {
        let result = self
            .client
            .get(format!("{}/getMe", self.bot_url))
            .timeout(IDENTITY_TIMEOUT)
            .send()
            .await;

        let response = match result {
            Ok(r) => r,
            Err(e) => {
                error!(error = %e, "Error testing bot connection");
                return false;
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "Bot connection failed");
            return false;
        }

        match response.json::<GetMeResponse>().await {
            Ok(body) if body.ok => {
                let name = body
                    .result
                    .and_then(|b| b.first_name.or(b.username))
                    .unwrap_or_default();
                if name.is_empty() {
                    error!("Bot connection failed: identity did not resolve");
                    return false;
                }
                info!(bot = %name, "Bot connection successful: {}", name);
                true
            }
            Ok(_) => {
                error!("Bot connection failed: response not ok");
                false
            }
            Err(e) => {
                error!(error = %e, "Bot connection failed: malformed getMe response");
                false
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct GetMeResponse {
    ok: bool,
    result: Option<BotInfo>,
}

#[derive(Debug, Deserialize)]
struct BotInfo {
    first_name: Option<String>,
    username: Option<String>,
}
