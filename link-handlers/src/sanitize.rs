//! URL validation and filename derivation.

/// Name used when the URL has no final path segment or nothing survives sanitizing.
pub const FALLBACK_FILE_NAME: &str = "file";

/// Returns true if `text` starts with `http://` or `https://`.
pub fn is_http_url(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://")
}

/// Derives a local filename from the final path segment of `url`.
///
/// Hyphens become underscores, then everything outside `[A-Za-z0-9_.]` is dropped.
/// The result is never empty, never `.` or `..`, and is stable under re-sanitizing.
pub fn sanitize_filename(url: &str) -> String {
    let segment = url.rsplit('/').next().unwrap_or_default();
    let segment = if segment.is_empty() {
        FALLBACK_FILE_NAME
    } else {
        segment
    };

    let name: String = segment
        .chars()
        .map(|c| if c == '-' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '.')
        .collect();

    if name.is_empty() || name == "." || name == ".." {
        FALLBACK_FILE_NAME.to_string()
    } else {
        name
    }
}
