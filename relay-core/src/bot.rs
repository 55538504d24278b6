//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; relay-telegram implements it with teloxide and tests substitute a recording mock.

use crate::error::Result;
use crate::types::{Chat, Document, Message};
use async_trait::async_trait;

/// Abstraction for sending text and files. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// Uploads a local file to the given chat under `document.file_name`.
    async fn send_document(&self, chat: &Chat, document: &Document) -> Result<()>;
}
