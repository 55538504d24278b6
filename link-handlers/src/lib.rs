//! # Link handlers
//!
//! Handlers for the file relay bot: [`LinkHandler`] downloads the file behind a URL and sends it back under a
//! sanitized name, [`StartHandler`] answers `/start`, [`LoggingHandler`] logs each message and its outcome.

mod download;
mod error;
mod link_handler;
mod logging;
pub mod messages;
mod sanitize;
mod start_handler;

pub use download::{DownloadJob, Downloader, LocalFile, CHUNK_SIZE, DEFAULT_CONNECT_TIMEOUT};
pub use error::LinkError;
pub use link_handler::{LinkHandler, LinkOutcome};
pub use logging::LoggingHandler;
pub use sanitize::{is_http_url, sanitize_filename, FALLBACK_FILE_NAME};
pub use start_handler::StartHandler;
