use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::comparison::{ComparisonKey, Window};
use super::table::TablePage;

// ---------------------------------------------------------------------------
// Series — one trace of a line or bar chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point<X> {
    pub x: X,
    /// `None` renders as a gap.
    pub y: Option<f64>,
    /// Display value printed next to the point, already rescaled.
    pub text: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series<X> {
    pub name: String,
    pub color: Option<String>,
    pub points: Vec<Point<X>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
    pub range: Option<[f64; 2]>,
}

impl Axis {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            range: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Figures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<Series<NaiveDate>>,
}

/// Column-oriented pie trace: `labels[i]`, `values[i]`, `shares[i]` and
/// `colors[i]` describe slice `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<i64>,
    pub shares: Vec<f64>,
    pub colors: Vec<Option<String>>,
}

/// Grouped bars for the designated bank and the market, with the designated
/// share drawn as a line on the secondary axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonChart {
    pub title: String,
    pub window: Window,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub y2_axis: Axis,
    pub bars: Vec<Series<ComparisonKey>>,
    pub share_line: Series<ComparisonKey>,
}

/// Every visual for one selection, the payload of a combined update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figures {
    pub result_line: LineChart,
    pub spread_line: LineChart,
    pub pie: PieChart,
    pub comparison: ComparisonChart,
    pub table: TablePage,
}
