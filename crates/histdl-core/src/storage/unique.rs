//! Browser-style destination names (`report.csv` → `report (1).csv`).

use std::path::{Path, PathBuf};

/// The `n`-th name tried for `wanted`: `wanted` itself for 0, otherwise
/// `stem (n).ext` in the same directory.
pub fn candidate_path(wanted: &Path, n: u32) -> PathBuf {
    if n == 0 {
        return wanted.to_path_buf();
    }
    let parent = wanted.parent().unwrap_or_else(|| Path::new(""));
    let stem = wanted
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = wanted
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    parent.join(format!("{stem} ({n}){ext}"))
}
