//! Minimal HTTP/1.1 server that accepts a form submission for integration tests.
//!
//! Answers every request with one canned response and records the method,
//! target and body it received so tests can inspect the submission.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: &'static str,
    pub content_disposition: Option<String>,
    pub body: Vec<u8>,
}

impl CannedResponse {
    pub fn ok(content_disposition: Option<&str>, body: &[u8]) -> Self {
        Self {
            status: "200 OK",
            content_disposition: content_disposition.map(str::to_string),
            body: body.to_vec(),
        }
    }

    pub fn error(status: &'static str) -> Self {
        Self {
            status,
            content_disposition: None,
            body: b"<html>Bad Request</html>".to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Received {
    pub method: String,
    pub target: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// Running server: base endpoint URL plus everything it has received.
pub struct FormServer {
    pub endpoint: String,
    pub received: Arc<Mutex<Vec<Received>>>,
}

/// Starts a server in a background thread. The endpoint is
/// `http://127.0.0.1:<port>/download`. The server runs until the process exits.
pub fn start(response: CannedResponse) -> FormServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let received = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&received);
    let response = Arc::new(response);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let log = Arc::clone(&log);
            let response = Arc::clone(&response);
            thread::spawn(move || handle(stream, &response, &log));
        }
    });
    FormServer {
        endpoint: format!("http://127.0.0.1:{}/download", port),
        received,
    }
}

fn handle(mut stream: std::net::TcpStream, response: &CannedResponse, log: &Mutex<Vec<Received>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let mut data = Vec::new();
    let mut buf = [0u8; 8192];
    let header_end = loop {
        let n = match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => n,
        };
        data.extend_from_slice(&buf[..n]);
        if let Some(pos) = find(&data, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&data[..header_end]).into_owned();
    let mut received = Received::default();
    let mut content_length = 0usize;
    for (i, line) in head.lines().enumerate() {
        if i == 0 {
            let mut parts = line.split_whitespace();
            received.method = parts.next().unwrap_or("").to_string();
            received.target = parts.next().unwrap_or("").to_string();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
            if name.eq_ignore_ascii_case("content-type") {
                received.content_type = Some(value.trim().to_string());
            }
        }
    }
    while data.len() < header_end + content_length {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
    }
    let body_end = (header_end + content_length).min(data.len());
    received.body = String::from_utf8_lossy(&data[header_end..body_end]).into_owned();
    log.lock().unwrap().push(received);

    let disposition = response
        .content_disposition
        .as_ref()
        .map(|cd| format!("Content-Disposition: {}\r\n", cd))
        .unwrap_or_default();
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: application/octet-stream\r\n{}Connection: close\r\n\r\n",
        response.status,
        response.body.len(),
        disposition
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&response.body);
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
