//! Download request and its form encoding.
//!
//! The body mirrors what an HTML form with these controls would post:
//! `asset_type`, `symbol`, `symbol_other` (only for the "other" entry),
//! `interval`, `start_date`, `end_date` and `ticks=on` when the box is checked.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::catalog::{AssetCategory, Interval, OTHER_SYMBOL};
use crate::error::TriggerError;
use crate::form::{format_date, DateRange};

/// Which symbol the user picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolChoice {
    /// A symbol from the category's list.
    Listed(String),
    /// The "other" entry plus the typed symbol.
    Other(String),
}

impl SymbolChoice {
    /// The symbol the server will export.
    pub fn effective(&self) -> &str {
        match self {
            SymbolChoice::Listed(s) | SymbolChoice::Other(s) => s,
        }
    }
}

/// A validated form, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub asset: AssetCategory,
    pub symbol: SymbolChoice,
    pub interval: Interval,
    pub range: DateRange,
    pub ticks: bool,
}

impl DownloadRequest {
    /// Form fields in submission order.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("asset_type", self.asset.as_str().to_string())];
        match &self.symbol {
            SymbolChoice::Listed(s) => fields.push(("symbol", s.clone())),
            SymbolChoice::Other(s) => {
                fields.push(("symbol", OTHER_SYMBOL.to_string()));
                fields.push(("symbol_other", s.clone()));
            }
        }
        fields.push(("interval", self.interval.code().to_string()));
        fields.push(("start_date", format_date(self.range.start)));
        fields.push(("end_date", format_date(self.range.end)));
        if self.ticks {
            fields.push(("ticks", "on".to_string()));
        }
        fields
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        for (k, v) in self.form_fields() {
            ser.append_pair(k, &v);
        }
        ser.finish()
    }

    /// Binds the request to an endpoint. GET carries the fields in the query
    /// string, POST in the body.
    pub fn to_submission(&self, endpoint: &str, method: HttpMethod) -> Result<Submission, TriggerError> {
        let mut url = Url::parse(endpoint).map_err(|source| TriggerError::Endpoint {
            url: endpoint.to_string(),
            source,
        })?;
        let body = match method {
            HttpMethod::Post => Some(self.encode()),
            HttpMethod::Get => {
                let mut pairs = url.query_pairs_mut();
                for (k, v) in self.form_fields() {
                    pairs.append_pair(k, &v);
                }
                drop(pairs);
                None
            }
        };
        Ok(Submission { method, url, body })
    }
}

/// Form method, as in the `method` attribute of the host form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    #[default]
    Post,
    Get,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Post => f.write_str("POST"),
            HttpMethod::Get => f.write_str("GET"),
        }
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "post" => Ok(HttpMethod::Post),
            "get" => Ok(HttpMethod::Get),
            other => Err(format!("unsupported form method {other:?}")),
        }
    }
}

/// Method, target and encoded body of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub method: HttpMethod,
    pub url: Url,
    pub body: Option<String>,
}
