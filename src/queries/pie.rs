//! Long-tail bucketing of operation counts for the pie chart.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::OTHER_LABEL;
use crate::models::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: i64,
    /// Fraction of the grand total, 0.0 when the total is zero.
    pub share: f64,
}

/// Groups filtered records by bank and folds minor banks into "Other".
pub struct PieQuery<'a> {
    rows: &'a [&'a Record],
}

impl<'a> PieQuery<'a> {
    pub fn new(rows: &'a [&'a Record]) -> Self {
        Self { rows }
    }

    /// `total_count` summed per bank, ordered by bank name.
    ///
    /// Sums saturate at `i64::MAX`; rows drawn from a loaded [`Dataset`]
    /// never reach it.
    ///
    /// [`Dataset`]: crate::Dataset
    pub fn totals_by_bank(&self) -> BTreeMap<&'a str, i64> {
        let mut totals: BTreeMap<&'a str, i64> = BTreeMap::new();
        for record in self.rows {
            let total = totals.entry(record.bank_name.as_str()).or_default();
            *total = total.saturating_add(record.total_count);
        }
        totals
    }

    /// One slice per bank whose share is at least `threshold`, followed by a
    /// single "Other" slice for the rest.
    ///
    /// "Other" is left out when it would be empty. A zero grand total skips
    /// bucketing and returns every bank.
    pub fn slices(&self, threshold: f64) -> Vec<PieSlice> {
        let by_bank = self.totals_by_bank();
        let grand_total = by_bank.values().fold(0i64, |acc, v| acc.saturating_add(*v));

        if grand_total == 0 {
            return by_bank
                .into_iter()
                .map(|(bank, value)| PieSlice {
                    label: bank.to_string(),
                    value,
                    share: 0.0,
                })
                .collect();
        }

        let total = grand_total as f64;
        let mut slices = Vec::new();
        let mut other = 0i64;
        for (bank, value) in by_bank {
            let share = value as f64 / total;
            if share >= threshold {
                slices.push(PieSlice {
                    label: bank.to_string(),
                    value,
                    share,
                });
            } else {
                other = other.saturating_add(value);
            }
        }

        if other != 0 {
            slices.push(PieSlice {
                label: OTHER_LABEL.to_string(),
                value: other,
                share: other as f64 / total,
            });
        }
        slices
    }
}
