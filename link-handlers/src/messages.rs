//! User-facing texts.

/// Reply to `/start`.
pub const USAGE: &str = "Hi 👋\n\
Send me a link to a file and I will download it and send it back with a clean name.\n\n\
Example:\nhttps://example.com/files/my-file-01.pdf";

pub const INVALID_URL: &str = "❌ Please send a valid link (http or https).";

pub const DOWNLOADING: &str = "🔄 Downloading the file, please wait...";

pub fn download_failed(error: &str) -> String {
    format!("❌ Failed to download the file:\n{error}")
}

pub fn send_failed(error: &str) -> String {
    format!("❌ Failed to send the file:\n{error}")
}

/// Caption attached to the relayed file.
pub fn caption(filename: &str) -> String {
    format!("✅ File sent with its new name:\n{filename}")
}
