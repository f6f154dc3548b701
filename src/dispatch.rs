//! Control → visual wiring.
//!
//! Each [`Visual`] declares the [`Control`]s it reads. A host (the HTTP demo,
//! a UI event loop) recomputes only [`affected_by`] visuals when a control
//! changes, calling [`Dashboard::render`](crate::Dashboard::render) for each.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::models::{ComparisonChart, LineChart, PieChart, Selection, TablePage, TableRequest, Window};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Year,
    Quarter,
    Bank,
    /// Select-all / clear-all button; writes the bank control.
    BankToggle,
    Window,
    /// Sort and page of the data table.
    TablePaging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visual {
    ResultLine,
    SpreadLine,
    Pie,
    Comparison,
    Table,
}

impl Control {
    pub const ALL: [Control; 6] = [
        Control::Year,
        Control::Quarter,
        Control::Bank,
        Control::BankToggle,
        Control::Window,
        Control::TablePaging,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Control::Year => "year",
            Control::Quarter => "quarter",
            Control::Bank => "bank",
            Control::BankToggle => "bank_toggle",
            Control::Window => "window",
            Control::TablePaging => "table_paging",
        }
    }
}

impl FromStr for Control {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Control::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s.trim())
            .ok_or_else(|| DashboardError::InvalidArgument(format!("unknown control: {s}")))
    }
}

const FILTERS: [Control; 3] = [Control::Year, Control::Quarter, Control::Bank];

impl Visual {
    pub const ALL: [Visual; 5] = [
        Visual::ResultLine,
        Visual::SpreadLine,
        Visual::Pie,
        Visual::Comparison,
        Visual::Table,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Visual::ResultLine => "result_line",
            Visual::SpreadLine => "spread_line",
            Visual::Pie => "pie",
            Visual::Comparison => "comparison",
            Visual::Table => "table",
        }
    }

    /// Controls whose value this visual is computed from.
    pub fn inputs(self) -> &'static [Control] {
        match self {
            Visual::ResultLine | Visual::SpreadLine | Visual::Pie => &FILTERS,
            Visual::Comparison => &[Control::Year, Control::Quarter, Control::Bank, Control::Window],
            Visual::Table => &[
                Control::Year,
                Control::Quarter,
                Control::Bank,
                Control::TablePaging,
            ],
        }
    }
}

impl FromStr for Visual {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Visual::ALL
            .iter()
            .copied()
            .find(|v| v.name() == s.trim())
            .ok_or_else(|| DashboardError::InvalidArgument(format!("unknown visual: {s}")))
    }
}

impl fmt::Display for Visual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Visuals to recompute after `control` changes.
pub fn affected_by(control: Control) -> Vec<Visual> {
    let control = match control {
        Control::BankToggle => Control::Bank,
        other => other,
    };
    Visual::ALL
        .into_iter()
        .filter(|v| v.inputs().contains(&control))
        .collect()
}

/// Current value of every control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub selection: Selection,
    pub window: Window,
    pub table: TableRequest,
}

impl ViewState {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }
}

/// Output of a single visual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "figure", rename_all = "snake_case")]
pub enum Rendered {
    Line(LineChart),
    Pie(PieChart),
    Comparison(ComparisonChart),
    Table(TablePage),
}
