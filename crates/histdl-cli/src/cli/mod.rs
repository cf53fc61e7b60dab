//! CLI for the histdl download client.

mod commands;
mod terminal;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use histdl_core::catalog::{AssetCategory, Interval};
use histdl_core::config;
use histdl_core::request::HttpMethod;
use std::path::PathBuf;

use commands::{run_completions, run_download, run_intervals, run_symbols, DownloadArgs};

/// Top-level CLI for the histdl download client.
#[derive(Debug, Parser)]
#[command(name = "histdl")]
#[command(about = "histdl: download historical market data from an export endpoint", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Submit a download request and save the returned file.
    Download {
        /// Asset category (synthetic or forex). Defaults to the configured category.
        #[arg(long, value_name = "CATEGORY")]
        asset: Option<AssetCategory>,
        /// Symbol from the category's list, or "other" together with --symbol-other.
        #[arg(long)]
        symbol: String,
        /// Free-text symbol, required when --symbol is "other".
        #[arg(long, value_name = "SYMBOL")]
        symbol_other: Option<String>,
        /// Interval code (M1 … M30, H1 … H12, D1, W1, MN1).
        #[arg(long)]
        interval: Interval,
        /// First day, YYYY-MM-DD (default: today).
        #[arg(long, value_name = "DATE")]
        start: Option<String>,
        /// Last day, YYYY-MM-DD (default: today).
        #[arg(long, value_name = "DATE")]
        end: Option<String>,
        /// Request tick data.
        #[arg(long)]
        ticks: bool,
        /// Export endpoint URL (overrides config).
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
        /// Form method: post or get (overrides config).
        #[arg(long)]
        method: Option<HttpMethod>,
        /// Directory to save into (overrides config; default: current directory).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Replace an existing file with the same name.
        #[arg(long)]
        overwrite: bool,
    },

    /// List the symbols offered for an asset category.
    Symbols {
        /// Asset category (default: the configured category).
        #[arg(long, value_name = "CATEGORY")]
        asset: Option<AssetCategory>,
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the interval codes and their labels.
    Intervals {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Download {
                asset,
                symbol,
                symbol_other,
                interval,
                start,
                end,
                ticks,
                endpoint,
                method,
                output_dir,
                overwrite,
            } => {
                let args = DownloadArgs {
                    asset: asset.unwrap_or(cfg.default_asset),
                    symbol,
                    symbol_other,
                    interval,
                    start,
                    end,
                    ticks,
                    endpoint,
                    method,
                    output_dir,
                    overwrite,
                };
                let cwd = std::env::current_dir()?;
                run_download(&cfg, &cwd, args).await?;
            }
            CliCommand::Symbols { asset, json } => {
                run_symbols(asset.unwrap_or(cfg.default_asset), json)?
            }
            CliCommand::Intervals { json } => run_intervals(json)?,
            CliCommand::Completions { shell } => run_completions(shell, &mut Cli::command()),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
