//! Download form state.
//!
//! Holds the user's selections the way the download page does: the asset
//! category radio drives which symbols are offered, the "other" entry turns the
//! free-text symbol field into a required field, and the date fields default to
//! today. `build_request` validates everything into a [`DownloadRequest`].

mod dates;

pub use dates::{format_date, parse_date, DateRange, DATE_FORMAT};

use chrono::NaiveDate;

use crate::catalog::{AssetCategory, Interval, OTHER_SYMBOL};
use crate::error::FormError;
use crate::request::{DownloadRequest, SymbolChoice};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Selection {
    Listed(String),
    Other,
}

/// Mutable form model; one per page load (or CLI invocation).
#[derive(Debug, Clone)]
pub struct DownloadForm {
    asset: AssetCategory,
    selection: Option<Selection>,
    symbol_other: String,
    interval: Option<Interval>,
    range: DateRange,
    ticks: bool,
}

impl DownloadForm {
    /// Fresh form: forex preselected, nothing else chosen, both dates on `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            asset: AssetCategory::default(),
            selection: None,
            symbol_other: String::new(),
            interval: None,
            range: DateRange::single_day(today),
            ticks: false,
        }
    }

    /// Fresh form dated with the local calendar day.
    pub fn for_today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn asset(&self) -> AssetCategory {
        self.asset
    }

    /// Switches category. The symbol list is replaced and any selection cleared.
    pub fn set_asset_category(&mut self, asset: AssetCategory) {
        if asset != self.asset {
            tracing::debug!(from = %self.asset, to = %asset, "asset category changed");
        }
        self.asset = asset;
        self.selection = None;
        self.symbol_other.clear();
    }

    /// Entries offered in the symbol selector: the category's symbols, then "other".
    pub fn symbol_options(&self) -> Vec<&'static str> {
        let mut opts = self.asset.symbols().to_vec();
        opts.push(OTHER_SYMBOL);
        opts
    }

    /// Selects an entry of the symbol selector.
    ///
    /// "other" makes the free-text field required. A listed symbol clears the
    /// free-text field. Values not offered for the current category are rejected
    /// and leave the previous selection untouched.
    pub fn select_symbol(&mut self, value: &str) -> Result<(), FormError> {
        let value = value.trim();
        if value == OTHER_SYMBOL {
            self.selection = Some(Selection::Other);
            return Ok(());
        }
        if !self.asset.contains(value) {
            return Err(FormError::SymbolNotOffered {
                symbol: value.to_string(),
                category: self.asset.to_string(),
            });
        }
        self.selection = Some(Selection::Listed(value.to_string()));
        self.symbol_other.clear();
        Ok(())
    }

    pub fn selected_symbol(&self) -> Option<&str> {
        match self.selection.as_ref()? {
            Selection::Listed(s) => Some(s),
            Selection::Other => Some(OTHER_SYMBOL),
        }
    }

    /// True while the "other" entry is selected.
    pub fn symbol_other_required(&self) -> bool {
        self.selection == Some(Selection::Other)
    }

    pub fn set_symbol_other(&mut self, text: &str) {
        self.symbol_other = text.to_string();
    }

    pub fn symbol_other(&self) -> &str {
        &self.symbol_other
    }

    pub fn set_interval(&mut self, interval: Interval) {
        self.interval = Some(interval);
    }

    pub fn interval(&self) -> Option<Interval> {
        self.interval
    }

    pub fn set_start_date(&mut self, input: &str) -> Result<(), FormError> {
        self.range.start = parse_date(input)?;
        Ok(())
    }

    pub fn set_end_date(&mut self, input: &str) -> Result<(), FormError> {
        self.range.end = parse_date(input)?;
        Ok(())
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn set_ticks(&mut self, ticks: bool) {
        self.ticks = ticks;
    }

    /// Validates the form. `max_range_days == 0` disables the span limit.
    pub fn build_request(&self, max_range_days: u32) -> Result<DownloadRequest, FormError> {
        let symbol = match &self.selection {
            None => return Err(FormError::MissingSymbol),
            Some(Selection::Listed(s)) => SymbolChoice::Listed(s.clone()),
            Some(Selection::Other) => {
                let typed = self.symbol_other.trim();
                if typed.is_empty() {
                    return Err(FormError::MissingSymbolOther);
                }
                SymbolChoice::Other(typed.to_string())
            }
        };
        let interval = self.interval.ok_or(FormError::MissingInterval)?;
        self.range.validate(max_range_days)?;
        Ok(DownloadRequest {
            asset: self.asset,
            symbol,
            interval,
            range: self.range,
            ticks: self.ticks,
        })
    }
}
