//! Sampling intervals (bar sizes) accepted by the export endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Bar size. The wire code is a unit letter (`M`, `H`, `D`, `W`, `MN`) followed
/// by a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Interval {
    M1,
    M2,
    M3,
    M4,
    M5,
    M6,
    M10,
    M12,
    M15,
    M20,
    M30,
    H1,
    H2,
    H3,
    H4,
    H6,
    H8,
    H12,
    D1,
    W1,
    MN1,
}

impl Interval {
    /// Every interval, in the order the selector lists them.
    pub const ALL: [Interval; 21] = [
        Interval::M1,
        Interval::M2,
        Interval::M3,
        Interval::M4,
        Interval::M5,
        Interval::M6,
        Interval::M10,
        Interval::M12,
        Interval::M15,
        Interval::M20,
        Interval::M30,
        Interval::H1,
        Interval::H2,
        Interval::H3,
        Interval::H4,
        Interval::H6,
        Interval::H8,
        Interval::H12,
        Interval::D1,
        Interval::W1,
        Interval::MN1,
    ];

    /// Value sent in the `interval` form field.
    pub fn code(self) -> &'static str {
        match self {
            Interval::M1 => "M1",
            Interval::M2 => "M2",
            Interval::M3 => "M3",
            Interval::M4 => "M4",
            Interval::M5 => "M5",
            Interval::M6 => "M6",
            Interval::M10 => "M10",
            Interval::M12 => "M12",
            Interval::M15 => "M15",
            Interval::M20 => "M20",
            Interval::M30 => "M30",
            Interval::H1 => "H1",
            Interval::H2 => "H2",
            Interval::H3 => "H3",
            Interval::H4 => "H4",
            Interval::H6 => "H6",
            Interval::H8 => "H8",
            Interval::H12 => "H12",
            Interval::D1 => "D1",
            Interval::W1 => "W1",
            Interval::MN1 => "MN1",
        }
    }

    /// Human label shown next to the code.
    pub fn label(self) -> String {
        let n = self.count();
        match self.unit_minutes() {
            1 => plural(n, "Minute"),
            60 => plural(n, "Hour"),
            _ => match self {
                Interval::D1 => "Daily".to_string(),
                Interval::W1 => "Weekly".to_string(),
                _ => "Monthly".to_string(),
            },
        }
    }

    /// Nominal bar length. A month counts as 30 days.
    pub fn duration_hint(self) -> Duration {
        Duration::from_secs(self.unit_minutes() * self.count() * 60)
    }

    fn count(self) -> u64 {
        let digits = self.code().trim_start_matches(|c: char| c.is_ascii_alphabetic());
        digits.parse().unwrap_or(1)
    }

    fn unit_minutes(self) -> u64 {
        let code = self.code();
        if code.starts_with("MN") {
            30 * 24 * 60
        } else if code.starts_with('M') {
            1
        } else if code.starts_with('H') {
            60
        } else if code.starts_with('D') {
            24 * 60
        } else {
            7 * 24 * 60
        }
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown interval {0:?}")]
pub struct UnknownInterval(pub String);

impl FromStr for Interval {
    type Err = UnknownInterval;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Interval::ALL
            .into_iter()
            .find(|i| i.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownInterval(s.to_string()))
    }
}

impl TryFrom<String> for Interval {
    type Error = UnknownInterval;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Interval> for String {
    fn from(i: Interval) -> Self {
        i.code().to_string()
    }
}
