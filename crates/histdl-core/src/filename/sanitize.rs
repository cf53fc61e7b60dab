//! Filesystem-safe filename sanitization.

/// Longest name most Linux filesystems accept (NAME_MAX), in bytes.
const NAME_MAX: usize = 255;

/// Sanitizes a server-suggested filename before it touches the disk.
///
/// - Replaces NUL, `/`, `\`, and control characters with `_`
/// - Collapses runs of replaced characters into one `_`
/// - Trims leading/trailing spaces and dots, so `..` and hidden names cannot escape
/// - Limits length to 255 bytes without splitting a UTF-8 character
///
/// Spaces inside the name are kept (`EURUSD M1.csv` stays as is).
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_replaced = false;

    for c in name.chars() {
        if c == '\0' || c == '/' || c == '\\' || c.is_control() {
            if !prev_replaced {
                out.push('_');
            }
            prev_replaced = true;
        } else {
            out.push(c);
            prev_replaced = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == ' ' || c == '.');

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
