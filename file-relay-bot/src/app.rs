//! Assembly and startup: router, handler chain, Telegram REPL.

use anyhow::Result;
use handler_chain::{HandlerChain, MessagePattern, Router};
use link_handlers::{Downloader, LinkHandler, LoggingHandler, StartHandler};
use relay_core::{init_tracing, Bot};
use relay_telegram::{register_commands, run_repl, TelegramBotAdapter};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::BotConfig;

/// Builds `LoggingHandler → Router { /start → StartHandler, text → LinkHandler }`.
/// Other commands match no route and are ignored.
pub fn build_handler_chain(config: &BotConfig, bot: Arc<dyn Bot>) -> Result<HandlerChain> {
    let downloader = Downloader::new(config.connect_timeout)?;

    let router = Router::new()
        .route(
            MessagePattern::command("start"),
            Arc::new(StartHandler::new(bot.clone())),
        )
        .route(
            MessagePattern::Text,
            Arc::new(LinkHandler::new(
                bot,
                downloader,
                config.download_dir.clone(),
            )),
        );

    Ok(HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(router)))
}

/// Main entry: validate config, init logging, build the chain, then run the REPL until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;
    std::fs::create_dir_all(&config.download_dir)?;

    info!(
        download_dir = %config.download_dir.display(),
        connect_timeout_secs = config.connect_timeout.as_secs(),
        max_concurrent_jobs = config.max_concurrent_jobs,
        "Initializing bot"
    );

    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(&config, bot)?;

    register_commands(&teloxide_bot).await;
    info!("Bot started successfully");

    run_repl(teloxide_bot, handler_chain, config.max_concurrent_jobs).await
}
