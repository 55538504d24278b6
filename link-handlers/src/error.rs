use thiserror::Error;

/// Failures of a single link relay. All are reported to the user; none are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("not an http(s) URL")]
    InvalidUrl,

    #[error("download failed: {0}")]
    Download(String),

    #[error("send failed: {0}")]
    Send(String),
}

impl LinkError {
    /// Wraps a transport or storage error, keeping its whole source chain (`outer: cause: root cause`).
    pub(crate) fn download(err: impl Into<anyhow::Error>) -> Self {
        Self::Download(format!("{:#}", err.into()))
    }
}
