//! Static catalog of what the data server can export.
//!
//! Asset categories decide which symbol list is offered; intervals are a
//! fixed table shared by every category.

mod interval;
mod symbols;

pub use interval::{Interval, UnknownInterval};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire value of the "other" entry in the symbol list. When it is selected the
/// real symbol travels in the `symbol_other` form field.
pub const OTHER_SYMBOL: &str = "other";

/// Top-level grouping of tradable instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    /// Broker-generated synthetic indices.
    Synthetic,
    /// Currency pairs.
    #[default]
    Forex,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 2] = [AssetCategory::Synthetic, AssetCategory::Forex];

    /// Value sent in the `asset_type` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetCategory::Synthetic => "synthetic",
            AssetCategory::Forex => "forex",
        }
    }

    /// Symbols offered for this category, in display order.
    pub fn symbols(self) -> &'static [&'static str] {
        match self {
            AssetCategory::Synthetic => symbols::SYNTHETIC,
            AssetCategory::Forex => symbols::FOREX,
        }
    }

    /// True if `symbol` is one of this category's listed symbols (exact match).
    pub fn contains(self, symbol: &str) -> bool {
        self.symbols().contains(&symbol)
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown asset category {0:?} (expected \"synthetic\" or \"forex\")")]
pub struct UnknownAssetCategory(pub String);

impl FromStr for AssetCategory {
    type Err = UnknownAssetCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AssetCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAssetCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forex_list_has_only_pairs() {
        let fx = AssetCategory::Forex.symbols();
        assert_eq!(fx.len(), 47);
        assert!(fx.iter().all(|s| s.len() == 6 && s.chars().all(|c| c.is_ascii_uppercase())));
        assert!(fx.iter().all(|s| !AssetCategory::Synthetic.contains(s)));
    }

    #[test]
    fn synthetic_list_disjoint_from_forex() {
        let syn = AssetCategory::Synthetic.symbols();
        assert_eq!(syn, &["gainx400", "gainx600"]);
        assert!(syn.iter().all(|s| !AssetCategory::Forex.contains(s)));
    }

    #[test]
    fn other_sentinel_is_not_a_listed_symbol() {
        for c in AssetCategory::ALL {
            assert!(!c.contains(OTHER_SYMBOL));
        }
    }

    #[test]
    fn parse_category() {
        assert_eq!("forex".parse::<AssetCategory>().unwrap(), AssetCategory::Forex);
        assert_eq!(" Synthetic ".parse::<AssetCategory>().unwrap(), AssetCategory::Synthetic);
        assert!("crypto".parse::<AssetCategory>().is_err());
    }

    #[test]
    fn default_is_forex() {
        assert_eq!(AssetCategory::default(), AssetCategory::Forex);
    }
}
