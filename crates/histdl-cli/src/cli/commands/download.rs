//! `histdl download` – fill the form, submit it, save the file.

use anyhow::{Context, Result};
use histdl_core::catalog::{AssetCategory, Interval, OTHER_SYMBOL};
use histdl_core::config::HistdlConfig;
use histdl_core::form::DownloadForm;
use histdl_core::request::HttpMethod;
use histdl_core::trigger::DownloadTrigger;
use std::path::{Path, PathBuf};

use crate::cli::terminal::{StderrNotifier, TerminalBusy};

/// Arguments of the download command after config defaults are applied.
#[derive(Debug, Clone)]
pub struct DownloadArgs {
    pub asset: AssetCategory,
    pub symbol: String,
    pub symbol_other: Option<String>,
    pub interval: Interval,
    pub start: Option<String>,
    pub end: Option<String>,
    pub ticks: bool,
    pub endpoint: Option<String>,
    pub method: Option<HttpMethod>,
    pub output_dir: Option<PathBuf>,
    pub overwrite: bool,
}

/// Fills a form dated `today` from the arguments, in the order a user would.
pub fn build_form(args: &DownloadArgs, today: chrono::NaiveDate) -> Result<DownloadForm> {
    let mut form = DownloadForm::new(today);
    form.set_asset_category(args.asset);
    form.select_symbol(&args.symbol)?;
    if let Some(text) = &args.symbol_other {
        if form.symbol_other_required() {
            form.set_symbol_other(text);
        } else {
            tracing::warn!("--symbol-other ignored: --symbol is not {OTHER_SYMBOL:?}");
        }
    }
    form.set_interval(args.interval);
    if let Some(start) = &args.start {
        form.set_start_date(start)?;
    }
    if let Some(end) = &args.end {
        form.set_end_date(end)?;
    }
    form.set_ticks(args.ticks);
    Ok(form)
}

pub async fn run_download(cfg: &HistdlConfig, cwd: &Path, args: DownloadArgs) -> Result<()> {
    let form = build_form(&args, chrono::Local::now().date_naive())?;
    let request = form
        .build_request(cfg.max_range_days)
        .context("incomplete download form")?;

    let mut settings = cfg.trigger_settings(cwd);
    if let Some(endpoint) = args.endpoint {
        settings.endpoint = endpoint;
    }
    if let Some(method) = args.method {
        settings.method = method;
    }
    if let Some(dir) = args.output_dir {
        settings.download_dir = dir;
    }
    settings.overwrite |= args.overwrite;

    let trigger = DownloadTrigger::with_curl(settings, cfg.user_agent.as_deref());
    let busy = TerminalBusy::new(format!(
        "Downloading {} {} {}..{}",
        request.symbol.effective(),
        request.interval,
        request.range.start,
        request.range.end
    ));
    // The notifier has already reported the cause.
    let saved = trigger
        .submit(&request, &busy, &StderrNotifier)
        .await
        .map_err(|_| anyhow::anyhow!("no file saved"))?;
    println!("Saved {} ({} bytes)", saved.path.display(), saved.bytes);
    Ok(())
}
