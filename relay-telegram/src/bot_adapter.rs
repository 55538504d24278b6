//! Wraps teloxide::Bot and implements [`relay_core::Bot`]. Production code talks to Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use relay_core::{Bot as CoreBot, Chat, Document, RelayError, Result};
use teloxide::{prelude::*, types::ChatId, types::InputFile};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements relay-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| RelayError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, document: &Document) -> Result<()> {
        let file = InputFile::file(document.path.clone()).file_name(document.file_name.clone());
        let mut request = self.bot.send_document(ChatId(chat.id), file);
        if let Some(caption) = &document.caption {
            request = request.caption(caption.clone());
        }
        let sent = request
            .await
            .map_err(|e| RelayError::Bot(e.to_string()))?;
        debug!(chat_id = chat.id, message_id = %sent.id, file_name = %document.file_name, "Document sent");
        Ok(())
    }
}
