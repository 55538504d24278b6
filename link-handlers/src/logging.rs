//! Logs each message in before() and the outcome in after(); never stops the chain.

use async_trait::async_trait;
use relay_core::{Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let outcome = match response {
            HandlerResponse::Reply(text) => text.lines().next().unwrap_or_default(),
            HandlerResponse::Stop => "stopped",
            HandlerResponse::Continue | HandlerResponse::Ignore => "ignored",
        };
        info!(
            user_id = message.user.id,
            message_id = %message.id,
            outcome = %outcome,
            "Processed message"
        );
        Ok(())
    }
}
