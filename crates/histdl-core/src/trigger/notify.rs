//! User-facing outcome of a submission.

use super::SavedDownload;
use crate::error::TriggerError;

/// Receives the outcome of each submission. `failed` plays the role of a
/// blocking alert: it is called once per failed submission, after the busy
/// indicator is hidden.
pub trait Notifier: Send + Sync {
    fn failed(&self, error: &TriggerError);

    fn saved(&self, _download: &SavedDownload) {}
}

/// Reports failures through `tracing` only.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn failed(&self, error: &TriggerError) {
        tracing::error!("download failed: {error}");
    }
}
