use serde::{Deserialize, Serialize};

use super::record::Record;

/// `total_volume / total_result / 100`, or `None` when the result is not positive.
pub fn spread(total_volume: f64, total_result: f64) -> Option<f64> {
    if total_result > 0.0 {
        Some(total_volume / total_result / 100.0)
    } else {
        None
    }
}

/// Two decimals, ties to even (0.125 -> 0.12).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

// ---------------------------------------------------------------------------
// Totals — summed numeric columns for a group of records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub primary_volume: f64,
    pub interbank_volume: f64,
    pub operation_result: f64,
    pub operation_expense: f64,
    pub primary_count: i64,
    pub interbank_count: i64,
}

impl Totals {
    pub fn add(&mut self, record: &Record) {
        self.primary_volume += record.primary_volume;
        self.interbank_volume += record.interbank_volume;
        self.operation_result += record.operation_result;
        self.operation_expense += record.operation_expense;
        self.primary_count += record.primary_count;
        self.interbank_count += record.interbank_count;
    }

    pub fn total_volume(&self) -> f64 {
        self.primary_volume + self.interbank_volume
    }

    pub fn total_result(&self) -> f64 {
        self.operation_result + self.operation_expense
    }

    pub fn total_count(&self) -> i64 {
        self.primary_count + self.interbank_count
    }

    /// Spread recomputed from the summed columns, not summed per row.
    pub fn spread(&self) -> Option<f64> {
        spread(self.total_volume(), self.total_result()).map(round2)
    }
}

impl<'a> FromIterator<&'a Record> for Totals {
    fn from_iter<I: IntoIterator<Item = &'a Record>>(iter: I) -> Self {
        let mut totals = Totals::default();
        for record in iter {
            totals.add(record);
        }
        totals
    }
}
