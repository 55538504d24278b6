//! `/start`: static usage text.

use std::sync::Arc;

use async_trait::async_trait;
use relay_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::instrument;

use crate::messages;

pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        self.bot.reply_to(message, messages::USAGE).await?;
        Ok(HandlerResponse::Reply(messages::USAGE.to_string()))
    }
}
