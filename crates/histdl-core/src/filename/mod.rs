//! Save-name resolution for a download response.
//!
//! The server suggests a name through `Content-Disposition`; when it does not,
//! or the suggestion sanitizes to nothing, the configured fallback is used.

mod content_disposition;
mod sanitize;

pub use content_disposition::parse_content_disposition_filename;
pub use sanitize::sanitize_filename;

/// Name used when the response does not suggest a usable one.
pub const DEFAULT_FILENAME: &str = "data.csv";

/// Resolves the local filename for a response.
///
/// # Examples
///
/// - `resolve_filename(Some("attachment; filename=\"report.csv\""), "data.csv")` → `"report.csv"`
/// - `resolve_filename(None, "data.csv")` → `"data.csv"`
pub fn resolve_filename(content_disposition: Option<&str>, fallback: &str) -> String {
    let suggested = content_disposition
        .and_then(parse_content_disposition_filename)
        .map(|raw| sanitize_filename(&raw))
        .filter(|s| !s.is_empty());

    match suggested {
        Some(name) => name,
        None => {
            let fallback = sanitize_filename(fallback);
            if fallback.is_empty() {
                DEFAULT_FILENAME.to_string()
            } else {
                fallback
            }
        }
    }
}
