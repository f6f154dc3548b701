use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::record::Record;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    BankName,
    Year,
    Quarter,
    PeriodKey,
    PrimaryVolume,
    InterbankVolume,
    OperationResult,
    OperationExpense,
    PrimaryCount,
    InterbankCount,
    TotalVolume,
    TotalResult,
    TotalCount,
    Spread,
}

impl SortColumn {
    pub const ALL: [SortColumn; 14] = [
        SortColumn::BankName,
        SortColumn::Year,
        SortColumn::Quarter,
        SortColumn::PeriodKey,
        SortColumn::PrimaryVolume,
        SortColumn::InterbankVolume,
        SortColumn::OperationResult,
        SortColumn::OperationExpense,
        SortColumn::PrimaryCount,
        SortColumn::InterbankCount,
        SortColumn::TotalVolume,
        SortColumn::TotalResult,
        SortColumn::TotalCount,
        SortColumn::Spread,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortColumn::BankName => "bank_name",
            SortColumn::Year => "year",
            SortColumn::Quarter => "quarter",
            SortColumn::PeriodKey => "period_key",
            SortColumn::PrimaryVolume => "primary_volume",
            SortColumn::InterbankVolume => "interbank_volume",
            SortColumn::OperationResult => "operation_result",
            SortColumn::OperationExpense => "operation_expense",
            SortColumn::PrimaryCount => "primary_count",
            SortColumn::InterbankCount => "interbank_count",
            SortColumn::TotalVolume => "total_volume",
            SortColumn::TotalResult => "total_result",
            SortColumn::TotalCount => "total_count",
            SortColumn::Spread => "spread",
        }
    }
}

impl FromStr for SortColumn {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SortColumn::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| DashboardError::InvalidArgument(format!("unknown sort column: {s}")))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(DashboardError::InvalidArgument(format!(
                "unknown sort order: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub column: SortColumn,
    pub order: SortOrder,
}

/// Sorting and paging of the data table. Pages are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRequest {
    pub sort: Option<Sort>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableRequest {
    fn default() -> Self {
        Self {
            sort: None,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePage {
    pub rows: Vec<Record>,
    pub sort: Option<Sort>,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub total_rows: usize,
}
