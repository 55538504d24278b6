//! Explicit message routing: each route pairs a [`MessagePattern`] with a handler; the first match wins.

use async_trait::async_trait;
use relay_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, instrument};

/// What a route accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePattern {
    /// `/name`, optionally addressed (`/name@bot`) and followed by arguments. Case-insensitive.
    Command(String),
    /// Any non-empty text that is not a command.
    Text,
    /// Every message.
    Any,
}

impl MessagePattern {
    pub fn command(name: impl Into<String>) -> Self {
        Self::Command(name.into())
    }

    /// Returns true if `text` (already trimmed) is accepted by this pattern.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Command(name) => {
                parse_command(text).is_some_and(|cmd| cmd.eq_ignore_ascii_case(name))
            }
            Self::Text => !text.is_empty() && parse_command(text).is_none(),
            Self::Any => true,
        }
    }
}

/// Extracts the command name from `/name@bot args`. Returns None when `text` is not a command.
pub fn parse_command(text: &str) -> Option<&str> {
    let first = text.split_whitespace().next()?;
    let name = first.strip_prefix('/')?;
    let name = name.split('@').next().unwrap_or(name);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Pattern → handler table. The matched handler runs its full before/handle/after cycle.
#[derive(Clone, Default)]
pub struct Router {
    routes: Vec<(MessagePattern, Arc<dyn Handler>)>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a route. Routes are tried in insertion order.
    pub fn route(mut self, pattern: MessagePattern, handler: Arc<dyn Handler>) -> Self {
        self.routes.push((pattern, handler));
        self
    }

    /// Returns the handler of the first route matching `message`.
    pub fn resolve(&self, message: &Message) -> Option<&Arc<dyn Handler>> {
        let text = message.text();
        self.routes
            .iter()
            .find(|(pattern, _)| pattern.matches(text))
            .map(|(_, handler)| handler)
    }
}

#[async_trait]
impl Handler for Router {
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(handler) = self.resolve(message) else {
            debug!(chat_id = message.chat.id, "No route matched, ignoring");
            return Ok(HandlerResponse::Ignore);
        };

        if !handler.before(message).await? {
            return Ok(HandlerResponse::Stop);
        }
        let response = handler.handle(message).await?;
        handler.after(message, &response).await?;
        Ok(response)
    }
}
