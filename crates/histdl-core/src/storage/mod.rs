//! Saving a downloaded payload.
//!
//! The body is written to a uniquely named temp file in the destination
//! directory, synced, then moved into place, so a half-written file never
//! carries the final name. Without overwrite the final name is claimed with a
//! no-clobber link: if it is taken (by an older file or a concurrent
//! submission) the next browser-style ` (n)` name is tried.

mod unique;

pub use unique::candidate_path;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Suffix of in-progress temp files.
pub const TEMP_SUFFIX: &str = ".part";

/// Writes `body` as `dir/filename` and returns the path actually used.
///
/// `filename` must already be sanitized (a single path component).
pub fn save_download(dir: &Path, filename: &str, body: &[u8], overwrite: bool) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let mut tmp = tempfile::Builder::new()
        .prefix(".histdl-")
        .suffix(TEMP_SUFFIX)
        .tempfile_in(dir)?;
    tmp.write_all(body)?;
    tmp.as_file().sync_all()?;

    let wanted = dir.join(filename);
    let final_path = if overwrite {
        tmp.persist(&wanted).map_err(|e| e.error)?;
        wanted
    } else {
        claim_free_name(tmp, &wanted)?
    };

    tracing::info!(path = %final_path.display(), bytes = body.len(), "download saved");
    Ok(final_path)
}

/// Moves `tmp` to the first of `wanted`, `stem (1).ext`, ... that does not exist.
/// On error the temp file is removed when `tmp` drops.
fn claim_free_name(mut tmp: tempfile::NamedTempFile, wanted: &Path) -> io::Result<PathBuf> {
    let mut n = 0u32;
    loop {
        let candidate = candidate_path(wanted, n);
        match tmp.persist_noclobber(&candidate) {
            Ok(_) => return Ok(candidate),
            Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                tmp = e.file;
                n += 1;
            }
            Err(e) => return Err(e.error),
        }
    }
}
