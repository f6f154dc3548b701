use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::record::{Quarter, Record};

// ---------------------------------------------------------------------------
// Selection — current value of the year / quarter / bank filters
// ---------------------------------------------------------------------------

/// The three multi-select filter values.
///
/// A single selected value is just a one-element set. An empty set selects
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub years: BTreeSet<i32>,
    pub quarters: BTreeSet<Quarter>,
    pub banks: BTreeSet<String>,
}

impl Selection {
    pub fn new<Y, Q, B, S>(years: Y, quarters: Q, banks: B) -> Self
    where
        Y: IntoIterator<Item = i32>,
        Q: IntoIterator<Item = Quarter>,
        B: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            years: years.into_iter().collect(),
            quarters: quarters.into_iter().collect(),
            banks: banks.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_years<Y: IntoIterator<Item = i32>>(mut self, years: Y) -> Self {
        self.years = years.into_iter().collect();
        self
    }

    pub fn with_quarters<Q: IntoIterator<Item = Quarter>>(mut self, quarters: Q) -> Self {
        self.quarters = quarters.into_iter().collect();
        self
    }

    pub fn with_banks<B, S>(mut self, banks: B) -> Self
    where
        B: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.banks = banks.into_iter().map(Into::into).collect();
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.years.contains(&record.year)
            && self.quarters.contains(&record.quarter)
            && self.banks.contains(&record.bank_name)
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty() || self.quarters.is_empty() || self.banks.is_empty()
    }
}
