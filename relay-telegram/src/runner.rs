//! REPL runner: converts teloxide messages to core::Message and dispatches them into a HandlerChain.
//!
//! Each text message is handled in its own tokio task; a semaphore caps how many run at once.

use anyhow::Result;
use handler_chain::HandlerChain;
use relay_core::ToCoreMessage;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tokio::sync::{AcquireError, Semaphore};
use tokio::task::JoinHandle;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Publishes the command list shown in Telegram clients. Failure is logged, not fatal.
pub async fn register_commands(bot: &teloxide::Bot) {
    let commands = vec![BotCommand::new("start", "How to use this bot")];
    if let Err(e) = bot.set_my_commands(commands).await {
        warn!(error = %e, "Failed to register bot commands");
    }
}

/// Waits for a free slot in `permits`, then runs `chain` on `message` in a new task that holds the slot
/// until it finishes. Pending jobs wait here rather than as spawned tasks.
pub async fn spawn_job(
    permits: &Arc<Semaphore>,
    chain: HandlerChain,
    message: relay_core::Message,
) -> std::result::Result<JoinHandle<()>, AcquireError> {
    let permit = permits.clone().acquire_owned().await?;
    Ok(tokio::spawn(async move {
        let _permit = permit;
        if let Err(e) = chain.handle(&message).await {
            error!(error = %e, user_id = message.user.id, "Handler chain failed");
        }
    }))
}

/// Starts the REPL with the given teloxide Bot and HandlerChain.
/// Calls get_me() first to log the bot username; each text message is converted to core::Message and handled
/// by `handler_chain` in a spawned task holding one of `max_concurrent_jobs` permits.
///
/// The permit is acquired before the task is spawned: when every slot is busy the REPL handler waits, so
/// at most `max_concurrent_jobs` tasks exist and further updates queue inside teloxide's dispatcher.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    max_concurrent_jobs: usize,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                info!(username = %username, "Bot identity resolved");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; continuing"),
    }

    let permits = Arc::new(Semaphore::new(max_concurrent_jobs.max(1)));
    let chain = handler_chain;

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();
        let permits = permits.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            if msg.text().is_none() {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Received non-text message, ignoring"
                );
                return respond(());
            }

            if let Err(e) = spawn_job(&permits, chain, core_msg).await {
                error!(error = %e, "Job semaphore closed");
            }

            respond(())
        }
    })
    .await;

    Ok(())
}
