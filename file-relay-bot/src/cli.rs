//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "file-relay-bot")]
#[command(about = "Telegram bot that relays linked files back with a clean name", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; token can override TG_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        /// Where transient downloads are stored (overrides DOWNLOAD_DIR).
        #[arg(short, long)]
        download_dir: Option<PathBuf>,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides TG_BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
