//! Tests for the download subcommand.

use super::{parse, parse_err};
use crate::cli::CliCommand;
use histdl_core::catalog::{AssetCategory, Interval};
use histdl_core::request::HttpMethod;

#[test]
fn cli_parse_download_minimal() {
    match parse(&["histdl", "download", "--symbol", "EURUSD", "--interval", "M1"]) {
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
            assert!(asset.is_none());
            assert_eq!(symbol, "EURUSD");
            assert!(symbol_other.is_none());
            assert_eq!(interval, Interval::M1);
            assert!(start.is_none() && end.is_none());
            assert!(!ticks);
            assert!(endpoint.is_none());
            assert!(method.is_none());
            assert!(output_dir.is_none());
            assert!(!overwrite);
        }
        _ => panic!("expected Download"),
    }
}

#[test]
fn cli_parse_download_full() {
    match parse(&[
        "histdl",
        "download",
        "--asset",
        "synthetic",
        "--symbol",
        "other",
        "--symbol-other",
        "gainx800",
        "--interval",
        "mn1",
        "--start",
        "2025-05-01",
        "--end",
        "2025-05-06",
        "--ticks",
        "--endpoint",
        "http://127.0.0.1:5000/download",
        "--method",
        "get",
        "--output-dir",
        "/tmp",
        "--overwrite",
    ]) {
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
            assert_eq!(asset, Some(AssetCategory::Synthetic));
            assert_eq!(symbol, "other");
            assert_eq!(symbol_other.as_deref(), Some("gainx800"));
            assert_eq!(interval, Interval::MN1);
            assert_eq!(start.as_deref(), Some("2025-05-01"));
            assert_eq!(end.as_deref(), Some("2025-05-06"));
            assert!(ticks);
            assert_eq!(endpoint.as_deref(), Some("http://127.0.0.1:5000/download"));
            assert_eq!(method, Some(HttpMethod::Get));
            assert_eq!(output_dir.as_deref(), Some(std::path::Path::new("/tmp")));
            assert!(overwrite);
        }
        _ => panic!("expected Download"),
    }
}

#[test]
fn cli_parse_download_requires_symbol_and_interval() {
    parse_err(&["histdl", "download", "--interval", "M1"]);
    parse_err(&["histdl", "download", "--symbol", "EURUSD"]);
}

#[test]
fn cli_parse_download_rejects_unknown_values() {
    parse_err(&["histdl", "download", "--symbol", "EURUSD", "--interval", "M7"]);
    parse_err(&[
        "histdl", "download", "--asset", "crypto", "--symbol", "BTCUSD", "--interval", "M1",
    ]);
    parse_err(&[
        "histdl", "download", "--symbol", "EURUSD", "--interval", "M1", "--method", "put",
    ]);
}
