//! Bot configuration: Telegram connectivity + logging + download settings. Loaded from env.

use anyhow::Result;
use link_handlers::DEFAULT_CONNECT_TIMEOUT;
use relay_telegram::TelegramConfig;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LOG_FILE: &str = "logs/file-relay-bot.log";
pub const DEFAULT_MAX_CONCURRENT_JOBS: usize = 4;

pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// LOG_FILE
    pub log_file: String,
    /// DOWNLOAD_DIR; transient files live here until sent
    pub download_dir: PathBuf,
    /// DOWNLOAD_CONNECT_TIMEOUT_SECS
    pub connect_timeout: Duration,
    /// MAX_CONCURRENT_JOBS
    pub max_concurrent_jobs: usize,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides TG_BOT_TOKEN if provided.
    /// A missing token fails with `RelayError::MissingConfiguration`.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let download_dir = env::var("DOWNLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        let connect_timeout = env::var("DOWNLOAD_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT);
        let max_concurrent_jobs = env::var("MAX_CONCURRENT_JOBS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONCURRENT_JOBS);

        Ok(Self {
            telegram,
            log_file,
            download_dir,
            connect_timeout,
            max_concurrent_jobs,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if self.max_concurrent_jobs == 0 {
            anyhow::bail!("MAX_CONCURRENT_JOBS must be at least 1");
        }
        Ok(())
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }
}
