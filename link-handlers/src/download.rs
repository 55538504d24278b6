//! Streamed download of a remote resource into a transient local file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures::StreamExt;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, instrument, warn};

use crate::error::LinkError;
use crate::sanitize::sanitize_filename;

/// Write buffer size; the body is flushed to disk in chunks of this size.
pub const CHUNK_SIZE: usize = 8192;

/// Upper bound on establishing the connection to the remote host.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// One relay request: the source URL, the derived filename and where the file is stored meanwhile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadJob {
    pub url: String,
    pub filename: String,
    pub path: PathBuf,
}

impl DownloadJob {
    pub fn new(url: impl Into<String>, download_dir: &Path) -> Self {
        let url = url.into();
        let filename = sanitize_filename(&url);
        let path = download_dir.join(&filename);
        Self {
            url,
            filename,
            path,
        }
    }
}

/// Owns a transient file; the file is removed when the guard is dropped.
#[derive(Debug)]
pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for LocalFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "Removed local file"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "Failed to remove local file"),
        }
    }
}

/// HTTP downloader; one shared client per process.
#[derive(Debug, Clone)]
pub struct Downloader {
    client: reqwest::Client,
}

impl Downloader {
    /// Builds a downloader whose connection attempts give up after `connect_timeout`.
    pub fn new(connect_timeout: Duration) -> Result<Self, LinkError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(LinkError::download)?;
        Ok(Self { client })
    }

    /// Fetches `job.url` into `job.path`.
    ///
    /// The request and status check happen before the file is created, so a refused request never touches
    /// storage. Once created, the file is owned by the returned [`LocalFile`]; on a mid-stream error the guard
    /// is dropped here and the partial file removed.
    #[instrument(skip(self, job), fields(url = %job.url, filename = %job.filename))]
    pub async fn fetch(&self, job: &DownloadJob) -> Result<LocalFile, LinkError> {
        let response = self
            .client
            .get(&job.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(LinkError::download)?;

        let local = LocalFile::new(&job.path);
        let file = tokio::fs::File::create(local.path())
            .await
            .map_err(LinkError::download)?;
        let mut writer = BufWriter::with_capacity(CHUNK_SIZE, file);

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(LinkError::download)?;
            writer
                .write_all(&chunk)
                .await
                .map_err(LinkError::download)?;
            written += chunk.len() as u64;
        }
        writer
            .flush()
            .await
            .map_err(LinkError::download)?;

        info!(bytes = written, path = %local.path().display(), "Download finished");
        Ok(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_derives_name_and_path() {
        let job = DownloadJob::new(
            "https://example.com/files/my-file-01.pdf",
            Path::new("/tmp/relay"),
        );
        assert_eq!(job.filename, "my_file_01.pdf");
        assert_eq!(job.path, PathBuf::from("/tmp/relay/my_file_01.pdf"));
    }

    #[test]
    fn test_local_file_removed_on_drop() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("payload.bin");
        std::fs::write(&path, b"data").unwrap();

        {
            let guard = LocalFile::new(&path);
            assert!(guard.path().exists());
        }

        assert!(!path.exists());
    }

    #[test]
    fn test_local_file_drop_tolerates_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("never-created.bin");
        drop(LocalFile::new(&path));
        assert!(!path.exists());
    }
}
