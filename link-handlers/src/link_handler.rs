//! Link relay: validate → download → send → clean up.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use relay_core::{Bot, Chat, Document, Handler, HandlerResponse, Message, RelayError, Result};
use tracing::{error, info, instrument, warn};

use crate::download::{DownloadJob, Downloader};
use crate::error::LinkError;
use crate::messages;
use crate::sanitize::is_http_url;

/// Result of one relay request, as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    FileSent { filename: String },
    RejectedInvalidUrl,
    DownloadFailed(String),
    SendFailed(String),
}

impl LinkOutcome {
    /// Text the user sees for this outcome. For `FileSent` it is the caption already attached to the file.
    pub fn user_text(&self) -> String {
        match self {
            Self::FileSent { filename } => messages::caption(filename),
            Self::RejectedInvalidUrl => messages::INVALID_URL.to_string(),
            Self::DownloadFailed(e) => messages::download_failed(e),
            Self::SendFailed(e) => messages::send_failed(e),
        }
    }
}

impl From<LinkError> for LinkOutcome {
    fn from(err: LinkError) -> Self {
        match err {
            LinkError::InvalidUrl => Self::RejectedInvalidUrl,
            LinkError::Download(e) => Self::DownloadFailed(e),
            LinkError::Send(e) => Self::SendFailed(e),
        }
    }
}

/// Message text of a transport error without the variant prefix.
fn underlying_message(err: RelayError) -> String {
    match err {
        RelayError::Bot(msg) => msg,
        other => other.to_string(),
    }
}

/// Downloads the file behind a URL and sends it back under a sanitized name.
pub struct LinkHandler {
    bot: Arc<dyn Bot>,
    downloader: Downloader,
    download_dir: PathBuf,
}

impl LinkHandler {
    pub fn new(bot: Arc<dyn Bot>, downloader: Downloader, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            bot,
            downloader,
            download_dir: download_dir.into(),
        }
    }

    /// Relays `url` to `chat`. The local copy, if one was created, is gone when this returns.
    #[instrument(skip(self, chat), fields(chat_id = chat.id))]
    pub async fn process(&self, chat: &Chat, url: &str) -> LinkOutcome {
        match self.relay(chat, url).await {
            Ok(filename) => {
                info!(filename = %filename, "File relayed");
                LinkOutcome::FileSent { filename }
            }
            Err(e) => {
                warn!(error = %e, "Link relay failed");
                e.into()
            }
        }
    }

    async fn relay(&self, chat: &Chat, url: &str) -> std::result::Result<String, LinkError> {
        if !is_http_url(url) {
            return Err(LinkError::InvalidUrl);
        }

        self.notify(chat, messages::DOWNLOADING).await;

        let job = DownloadJob::new(url, &self.download_dir);
        let local = self.downloader.fetch(&job).await?;

        let document = Document::new(local.path(), job.filename.as_str())
            .with_caption(messages::caption(&job.filename));
        self.bot
            .send_document(chat, &document)
            .await
            .map_err(|e| LinkError::Send(underlying_message(e)))?;

        Ok(job.filename)
    }

    /// Sends a status text; a failure here is logged and does not change the outcome.
    async fn notify(&self, chat: &Chat, text: &str) {
        if let Err(e) = self.bot.send_message(chat, text).await {
            error!(error = %e, chat_id = chat.id, "Failed to send status message");
        }
    }
}

#[async_trait]
impl Handler for LinkHandler {
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let outcome = self.process(&message.chat, message.text()).await;
        let text = outcome.user_text();
        if !matches!(outcome, LinkOutcome::FileSent { .. }) {
            self.notify(&message.chat, &text).await;
        }
        Ok(HandlerResponse::Reply(text))
    }
}
