//! Download trigger: submit the form, save the response as a named file.
//!
//! One submission is one network attempt. A non-2xx status or a network
//! failure is reported to the [`Notifier`] and returned; nothing is saved. On
//! success the filename comes from `Content-Disposition` (or the fallback) and
//! the body is written to the download directory. The [`BusyIndicator`] is
//! visible for exactly the duration of the attempt.

mod busy;
mod notify;

pub use busy::{BusyGuard, BusyIndicator, NoBusyIndicator};
pub use notify::{LogNotifier, Notifier};

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::TriggerError;
use crate::filename::{resolve_filename, DEFAULT_FILENAME};
use crate::request::{DownloadRequest, HttpMethod};
use crate::storage;
use crate::transport::{CurlTransport, Transport};

/// Where and how submissions are sent and saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSettings {
    /// Form action: absolute URL of the export endpoint.
    pub endpoint: String,
    pub method: HttpMethod,
    pub download_dir: PathBuf,
    /// Name used when the response suggests none.
    pub fallback_filename: String,
    /// Replace an existing file instead of picking `name (n).ext`.
    pub overwrite: bool,
}

impl TriggerSettings {
    pub fn new(endpoint: impl Into<String>, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: HttpMethod::Post,
            download_dir: download_dir.into(),
            fallback_filename: DEFAULT_FILENAME.to_string(),
            overwrite: false,
        }
    }
}

/// A file produced by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDownload {
    pub path: PathBuf,
    /// Name resolved from the response (before any ` (n)` collision suffix).
    pub filename: String,
    pub bytes: usize,
}

/// Sends submissions through a [`Transport`]. Cheap to clone; submissions
/// share nothing but the transport and settings.
pub struct DownloadTrigger<T: Transport + 'static = CurlTransport> {
    transport: Arc<T>,
    settings: TriggerSettings,
}

impl<T: Transport + 'static> Clone for DownloadTrigger<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            settings: self.settings.clone(),
        }
    }
}

impl DownloadTrigger<CurlTransport> {
    pub fn with_curl(settings: TriggerSettings, user_agent: Option<&str>) -> Self {
        Self::new(CurlTransport::new(user_agent), settings)
    }
}

impl<T: Transport + 'static> DownloadTrigger<T> {
    pub fn new(transport: T, settings: TriggerSettings) -> Self {
        Self {
            transport: Arc::new(transport),
            settings,
        }
    }

    pub fn settings(&self) -> &TriggerSettings {
        &self.settings
    }

    /// Submits `request` once and saves the response.
    ///
    /// The busy indicator is shown before the request and hidden before the
    /// notifier hears about the outcome, on every path. Concurrent calls are
    /// not serialized.
    pub async fn submit(
        &self,
        request: &DownloadRequest,
        busy: &dyn BusyIndicator,
        notifier: &dyn Notifier,
    ) -> Result<SavedDownload, TriggerError> {
        let result = {
            let _busy = BusyGuard::show(busy);
            self.attempt(request).await
        };
        match &result {
            Ok(saved) => notifier.saved(saved),
            Err(e) => {
                tracing::warn!(symbol = request.symbol.effective(), "submission failed: {e}");
                notifier.failed(e);
            }
        }
        result
    }

    async fn attempt(&self, request: &DownloadRequest) -> Result<SavedDownload, TriggerError> {
        let submission = request.to_submission(&self.settings.endpoint, self.settings.method)?;
        tracing::info!(
            method = %submission.method,
            url = %submission.url,
            symbol = request.symbol.effective(),
            interval = %request.interval,
            "submitting download"
        );

        let transport = Arc::clone(&self.transport);
        let response = tokio::task::spawn_blocking(move || transport.send(&submission)).await??;

        let filename = resolve_filename(
            response.content_disposition(),
            &self.settings.fallback_filename,
        );
        tracing::debug!(
            content_disposition = response.content_disposition().unwrap_or("-"),
            filename = %filename,
            "resolved filename"
        );

        let dir = self.settings.download_dir.clone();
        let overwrite = self.settings.overwrite;
        let bytes = response.body.len();
        let name = filename.clone();
        let path = tokio::task::spawn_blocking(move || {
            storage::save_download(&dir, &name, &response.body, overwrite)
                .map_err(|source| TriggerError::Save { path: dir.join(&name), source })
        })
        .await??;

        Ok(SavedDownload {
            path,
            filename,
            bytes,
        })
    }
}
