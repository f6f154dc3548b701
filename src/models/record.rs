use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::totals::{round2, spread};
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Quarter — calendar quarter, keyed by its month-end code
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    pub fn number(self) -> u8 {
        match self {
            Quarter::Q1 => 1,
            Quarter::Q2 => 2,
            Quarter::Q3 => 3,
            Quarter::Q4 => 4,
        }
    }

    /// Month the quarter closes in, 3/6/9/12.
    pub fn end_month(self) -> u32 {
        u32::from(self.number()) * 3
    }

    /// Two-digit month-end code used as the quarter filter value.
    pub fn code(self) -> &'static str {
        match self {
            Quarter::Q1 => "03",
            Quarter::Q2 => "06",
            Quarter::Q3 => "09",
            Quarter::Q4 => "12",
        }
    }
}

impl TryFrom<u8> for Quarter {
    type Error = DashboardError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Quarter::Q1),
            2 => Ok(Quarter::Q2),
            3 => Ok(Quarter::Q3),
            4 => Ok(Quarter::Q4),
            other => Err(DashboardError::InvalidData(format!(
                "quarter must be between 1 and 4, got {other}"
            ))),
        }
    }
}

impl From<Quarter> for u8 {
    fn from(q: Quarter) -> u8 {
        q.number()
    }
}

/// Accepts the month-end code with or without its leading zero (`"03"`,
/// `"3"`) or the quarter label (`"Q1"`). A bare number is always a month.
impl FromStr for Quarter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let unknown = || DashboardError::InvalidArgument(format!("unknown quarter: {s}"));
        if let Some(n) = s.strip_prefix(['Q', 'q']) {
            let n: u8 = n.parse().map_err(|_| unknown())?;
            return Quarter::try_from(n).map_err(|_| unknown());
        }
        let month: u32 = s.parse().map_err(|_| unknown())?;
        Quarter::ALL
            .into_iter()
            .find(|q| q.end_month() == month)
            .ok_or_else(unknown)
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// RawRecord — one typed CSV row, before derivation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub bank_name: String,
    pub year: i32,
    pub quarter: Quarter,
    pub primary_volume: f64,
    pub interbank_volume: f64,
    pub operation_result: f64,
    pub operation_expense: f64,
    pub primary_count: i64,
    pub interbank_count: i64,
}

// ---------------------------------------------------------------------------
// Record — normalized observation with derived attributes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub bank_name: String,
    pub year: i32,
    pub quarter: Quarter,
    pub period_key: NaiveDate,
    pub primary_volume: f64,
    pub interbank_volume: f64,
    pub operation_result: f64,
    pub operation_expense: f64,
    pub primary_count: i64,
    pub interbank_count: i64,
    pub total_volume: f64,
    pub total_result: f64,
    pub total_count: i64,
    /// `None` when `total_result` is zero or negative.
    pub spread: Option<f64>,
}

impl Record {
    /// Derive period key, totals and spread from a typed source row.
    pub fn from_raw(raw: RawRecord) -> crate::Result<Self> {
        let period_key = period_key(raw.year, raw.quarter)?;
        let total_volume = raw.primary_volume + raw.interbank_volume;
        let total_result = raw.operation_result + raw.operation_expense;
        let total_count = raw
            .primary_count
            .checked_add(raw.interbank_count)
            .ok_or_else(|| {
                DashboardError::InvalidData(format!(
                    "operation count overflows for {} {} {}",
                    raw.bank_name, raw.year, raw.quarter
                ))
            })?;
        Ok(Self {
            period_key,
            total_volume,
            total_result,
            total_count,
            spread: spread(total_volume, total_result).map(round2),
            bank_name: raw.bank_name,
            year: raw.year,
            quarter: raw.quarter,
            primary_volume: raw.primary_volume,
            interbank_volume: raw.interbank_volume,
            operation_result: raw.operation_result,
            operation_expense: raw.operation_expense,
            primary_count: raw.primary_count,
            interbank_count: raw.interbank_count,
        })
    }
}

/// First day of the quarter's closing month, e.g. 2020 Q2 -> 2020-06-01.
pub fn period_key(year: i32, quarter: Quarter) -> crate::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, quarter.end_month(), 1)
        .ok_or_else(|| DashboardError::InvalidData(format!("year out of range: {year}")))
}
