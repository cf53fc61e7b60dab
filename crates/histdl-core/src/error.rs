//! Error types for form validation and the download trigger.

use chrono::NaiveDate;

/// Failure of the single HTTP exchange: the network call itself, or a
/// response whose status is not 2xx.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Curl reported an error (connection refused, DNS, reset, ...).
    #[error("network error: {0}")]
    Network(#[from] curl::Error),
    /// Response had a non-2xx status. The body is not inspected.
    #[error("Error {0}")]
    Status(u32),
}

impl TransportError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u32> {
        match self {
            TransportError::Status(code) => Some(*code),
            TransportError::Network(_) => None,
        }
    }
}

/// The form cannot be turned into a request yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("no symbol selected")]
    MissingSymbol,
    #[error("symbol \"other\" selected but no symbol was typed")]
    MissingSymbolOther,
    #[error("symbol {symbol:?} is not offered for {category}")]
    SymbolNotOffered { symbol: String, category: String },
    #[error("no interval selected")]
    MissingInterval,
    #[error("invalid date {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("end date {end} is before start date {start}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
    #[error("range of {days} days exceeds the limit of {max} days; choose a shorter range")]
    RangeTooLong { days: i64, max: u32 },
}

/// Everything that can go wrong once the user submits.
#[derive(Debug, thiserror::Error)]
pub enum TriggerError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("invalid endpoint {url:?}: {source}")]
    Endpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("saving {path}: {source}")]
    Save {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("transfer task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
