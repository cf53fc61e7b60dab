//! CLI command handlers, one file per command.

mod completions;
mod download;
mod intervals;
mod symbols;

pub use completions::run_completions;
pub use download::{run_download, DownloadArgs};
pub use intervals::run_intervals;
pub use symbols::run_symbols;
