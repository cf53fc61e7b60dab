//! Integration test: submit a form to a local HTTP server and save the reply.

mod common;

use common::form_server::{self, CannedResponse};
use histdl_core::catalog::{AssetCategory, Interval};
use histdl_core::error::{TransportError, TriggerError};
use histdl_core::form::{parse_date, DownloadForm};
use histdl_core::request::HttpMethod;
use histdl_core::trigger::{DownloadTrigger, NoBusyIndicator, Notifier, SavedDownload, TriggerSettings};
use std::sync::Mutex;
use tempfile::tempdir;

#[derive(Default)]
struct Alerts(Mutex<Vec<String>>);

impl Notifier for Alerts {
    fn failed(&self, error: &TriggerError) {
        self.0.lock().unwrap().push(error.to_string());
    }

    fn saved(&self, _download: &SavedDownload) {}
}

fn eurusd_form() -> DownloadForm {
    let mut form = DownloadForm::new(parse_date("2025-05-06").unwrap());
    form.select_symbol("EURUSD").unwrap();
    form.set_interval(Interval::M15);
    form.set_start_date("2025-05-01").unwrap();
    form
}

#[tokio::test]
async fn post_form_and_save_named_file() {
    let body: Vec<u8> = b"time,open,high,low,close,tick_volume\n".repeat(500);
    let server = form_server::start(CannedResponse::ok(
        Some("attachment; filename=\"report.csv\""),
        &body,
    ));
    let dir = tempdir().unwrap();
    let trigger = DownloadTrigger::with_curl(TriggerSettings::new(&server.endpoint, dir.path()), None);
    let alerts = Alerts::default();

    let request = eurusd_form().build_request(30).unwrap();
    let saved = trigger
        .submit(&request, &NoBusyIndicator, &alerts)
        .await
        .expect("download succeeds");

    assert_eq!(saved.path, dir.path().join("report.csv"));
    assert_eq!(std::fs::read(&saved.path).unwrap(), body);
    assert!(alerts.0.lock().unwrap().is_empty());

    let received = server.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].method, "POST");
    assert_eq!(received[0].target, "/download");
    assert_eq!(
        received[0].content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(
        received[0].body,
        "asset_type=forex&symbol=EURUSD&interval=M15&start_date=2025-05-01&end_date=2025-05-06"
    );
}

#[tokio::test]
async fn response_without_disposition_uses_fallback() {
    let server = form_server::start(CannedResponse::ok(None, b"1,2,3\n"));
    let dir = tempdir().unwrap();
    let trigger = DownloadTrigger::with_curl(TriggerSettings::new(&server.endpoint, dir.path()), None);

    let request = eurusd_form().build_request(30).unwrap();
    let saved = trigger
        .submit(&request, &NoBusyIndicator, &Alerts::default())
        .await
        .unwrap();
    assert_eq!(saved.path, dir.path().join("data.csv"));
}

#[tokio::test]
async fn error_status_alerts_and_saves_nothing() {
    let server = form_server::start(CannedResponse::error("400 Bad Request"));
    let dir = tempdir().unwrap();
    let trigger = DownloadTrigger::with_curl(TriggerSettings::new(&server.endpoint, dir.path()), None);
    let alerts = Alerts::default();

    let request = eurusd_form().build_request(30).unwrap();
    let err = trigger
        .submit(&request, &NoBusyIndicator, &alerts)
        .await
        .unwrap_err();

    assert!(matches!(err, TriggerError::Transport(TransportError::Status(400))));
    assert_eq!(alerts.0.lock().unwrap().as_slice(), ["Error 400"]);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn other_symbol_and_ticks_sent_over_get() {
    let server = form_server::start(CannedResponse::ok(
        Some("attachment; filename=gainx_ticks.csv"),
        b"t\n",
    ));
    let dir = tempdir().unwrap();
    let mut settings = TriggerSettings::new(&server.endpoint, dir.path());
    settings.method = HttpMethod::Get;
    let trigger = DownloadTrigger::with_curl(settings, None);

    let mut form = DownloadForm::new(parse_date("2025-05-06").unwrap());
    form.set_asset_category(AssetCategory::Synthetic);
    form.select_symbol("other").unwrap();
    form.set_symbol_other("gainx800");
    form.set_interval(Interval::M1);
    form.set_ticks(true);
    let request = form.build_request(30).unwrap();

    let saved = trigger
        .submit(&request, &NoBusyIndicator, &Alerts::default())
        .await
        .unwrap();
    assert_eq!(saved.filename, "gainx_ticks.csv");

    let received = server.received.lock().unwrap();
    assert_eq!(received[0].method, "GET");
    assert_eq!(
        received[0].target,
        "/download?asset_type=synthetic&symbol=other&symbol_other=gainx800&interval=M1\
         &start_date=2025-05-06&end_date=2025-05-06&ticks=on"
    );
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Bind then drop to get a port nobody listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let dir = tempdir().unwrap();
    let trigger = DownloadTrigger::with_curl(
        TriggerSettings::new(format!("http://127.0.0.1:{port}/download"), dir.path()),
        None,
    );
    let alerts = Alerts::default();
    let request = eurusd_form().build_request(30).unwrap();
    let err = trigger
        .submit(&request, &NoBusyIndicator, &alerts)
        .await
        .unwrap_err();
    assert!(matches!(err, TriggerError::Transport(TransportError::Network(_))));
    assert_eq!(alerts.0.lock().unwrap().len(), 1);
}
