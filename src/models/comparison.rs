use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::totals::Totals;
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Window — accumulation granularity of the market comparison
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Window {
    #[default]
    Quarterly,
    Yearly,
}

impl FromStr for Window {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quarterly" | "quarter" | "q" => Ok(Window::Quarterly),
            "yearly" | "year" | "y" => Ok(Window::Yearly),
            other => Err(DashboardError::InvalidArgument(format!(
                "unknown window: {other} (expected quarterly or yearly)"
            ))),
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Window::Quarterly => f.write_str("quarterly"),
            Window::Yearly => f.write_str("yearly"),
        }
    }
}

// ---------------------------------------------------------------------------
// Measure — which summed column the share is computed on
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    #[default]
    Count,
    Volume,
    Result,
}

impl Measure {
    pub fn of(self, totals: &Totals) -> f64 {
        match self {
            Measure::Count => totals.total_count() as f64,
            Measure::Volume => totals.total_volume(),
            Measure::Result => totals.total_result(),
        }
    }
}

impl FromStr for Measure {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" => Ok(Measure::Count),
            "volume" => Ok(Measure::Volume),
            "result" => Ok(Measure::Result),
            other => Err(DashboardError::InvalidArgument(format!(
                "unknown measure: {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// ComparisonKey / ComparisonRow — one row of the designated-vs-market table
// ---------------------------------------------------------------------------

/// Grouping key of a comparison row: the period for quarterly windows, the
/// year for yearly ones. Serializes as the bare date or year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparisonKey {
    Period(NaiveDate),
    Year(i32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Designated bank name or the market label.
    pub label: String,
    pub key: ComparisonKey,
    #[serde(flatten)]
    pub totals: Totals,
    pub total_volume: f64,
    pub total_result: f64,
    pub total_count: i64,
    pub spread: Option<f64>,
    /// Percentage of the market for the same key. Only set on designated rows,
    /// `None` when the market total is zero.
    pub share: Option<f64>,
}

impl ComparisonRow {
    pub fn new(label: impl Into<String>, key: ComparisonKey, totals: Totals) -> Self {
        Self {
            label: label.into(),
            key,
            total_volume: totals.total_volume(),
            total_result: totals.total_result(),
            total_count: totals.total_count(),
            spread: totals.spread(),
            totals,
            share: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub window: Window,
    pub measure: Measure,
    pub designated: String,
    /// Designated rows first, then market rows, each ordered by key.
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn designated_rows(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.rows.iter().filter(move |r| r.label == self.designated)
    }

    pub fn market_rows(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.rows.iter().filter(move |r| r.label != self.designated)
    }
}
