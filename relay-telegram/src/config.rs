//! Minimal Telegram config: token and optional API URL.
//! Loaded from env: TG_BOT_TOKEN (or BOT_TOKEN), TELEGRAM_API_URL (or TELOXIDE_API_URL).

use relay_core::{RelayError, Result};
use std::env;
use tracing::info;

/// Env var holding the bot token.
pub const TOKEN_VAR: &str = "TG_BOT_TOKEN";
/// Accepted in place of [`TOKEN_VAR`].
pub const TOKEN_VAR_FALLBACK: &str = "BOT_TOKEN";

/// Telegram connectivity config.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides the env token. A missing token is [`RelayError::MissingConfiguration`].
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var(TOKEN_VAR)
                .or_else(|_| env::var(TOKEN_VAR_FALLBACK))
                .ok()
                .filter(|t| !t.trim().is_empty())
                .ok_or_else(|| RelayError::MissingConfiguration(TOKEN_VAR.to_string()))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
        })
    }

    /// Builds config with the given token; no API URL override.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Checks that the API URL, if set, parses.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                return Err(RelayError::Config(format!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                )));
            }
        }
        Ok(())
    }

    /// Creates the teloxide Bot, pointed at the API URL override when set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match &self.telegram_api_url {
            Some(url_str) => {
                let url = reqwest::Url::parse(url_str)
                    .map_err(|e| RelayError::Config(format!("invalid TELEGRAM_API_URL: {}", e)))?;
                info!(api_url = %url, "Using custom Telegram API URL");
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
