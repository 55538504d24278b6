//! Error types for the bot core.
//!
//! [`RelayError`] covers transport, configuration and IO failures. Link relay failures have their own type in
//! link-handlers and never reach this level.

use thiserror::Error;

/// Top-level error (bot transport, config, IO).
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(String),

    /// A required setting is absent. Fatal at startup.
    #[error("Missing configuration: {0} not set")]
    MissingConfiguration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations; uses [`RelayError`].
pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_configuration_message() {
        let err = RelayError::MissingConfiguration("TG_BOT_TOKEN".to_string());
        assert_eq!(err.to_string(), "Missing configuration: TG_BOT_TOKEN not set");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: RelayError = io.into();
        assert!(matches!(err, RelayError::Io(_)));
        assert_eq!(err.to_string(), "IO error: gone");
    }
}
