//! The single HTTP exchange behind a submission.
//!
//! Uses the curl crate (libcurl). One request, no retries, no overall timeout:
//! the export server may take a long time to build a large file.

mod parse;

use std::cell::Cell;
use std::str;

use crate::error::TransportError;
use crate::request::{HttpMethod, Submission};

/// Final response of a successful (2xx) exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    /// Header lines of the final response (after redirects), status line included.
    pub headers: Vec<String>,
    /// Opaque payload.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Value of header `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        parse::header_value(&self.headers, name)
    }

    pub fn content_disposition(&self) -> Option<&str> {
        self.header("content-disposition")
    }
}

/// Performs one blocking HTTP exchange.
///
/// Implementations must return `TransportError::Status` for any non-2xx final
/// status without handing the body back.
pub trait Transport: Send + Sync {
    fn send(&self, submission: &Submission) -> Result<HttpResponse, TransportError>;
}

/// libcurl-backed transport.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    user_agent: String,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl CurlTransport {
    pub fn new(user_agent: Option<&str>) -> Self {
        let user_agent = user_agent
            .map(str::to_string)
            .unwrap_or_else(|| format!("histdl/{}", env!("CARGO_PKG_VERSION")));
        Self { user_agent }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Transport for CurlTransport {
    fn send(&self, submission: &Submission) -> Result<HttpResponse, TransportError> {
        let mut headers: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();
        // Status of the response currently being received; updated on every
        // status line so redirects and `100 Continue` are skipped.
        let status = Cell::new(0u32);

        let mut easy = curl::easy::Easy::new();
        easy.url(submission.url.as_str())?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.useragent(&self.user_agent)?;
        match submission.method {
            HttpMethod::Post => {
                easy.post(true)?;
                easy.post_fields_copy(submission.body.as_deref().unwrap_or("").as_bytes())?;
                let mut list = curl::easy::List::new();
                list.append("Content-Type: application/x-www-form-urlencoded")?;
                // Do not wait for `100 Continue` on large forms.
                list.append("Expect:")?;
                easy.http_headers(list)?;
            }
            HttpMethod::Get => easy.get(true)?,
        }

        let performed = {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    let line = s.trim_end();
                    if let Some(code) = parse::parse_status_line(line) {
                        status.set(code);
                        headers.clear();
                    }
                    if !line.is_empty() {
                        headers.push(line.to_string());
                    }
                }
                true
            })?;
            transfer.write_function(|data| {
                if !(200..300).contains(&status.get()) {
                    // Error responses are not read; returning short aborts the transfer.
                    return Ok(0);
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()
        };

        let code = easy.response_code().unwrap_or(status.get());
        if code != 0 && !(200..300).contains(&code) {
            tracing::debug!(url = %submission.url, code, "non-success status");
            return Err(TransportError::Status(code));
        }
        performed?;
        if code == 0 {
            // Transfer "succeeded" without an HTTP status line (e.g. a non-HTTP URL).
            return Err(TransportError::Status(0));
        }

        tracing::debug!(
            url = %submission.url,
            code,
            bytes = body.len(),
            "response received"
        );
        Ok(HttpResponse {
            status: code,
            headers,
            body,
        })
    }
}
