//! Designated bank versus market reshaping for the comparison chart.

use std::collections::BTreeMap;

use crate::config::MARKET_LABEL;
use crate::models::{
    ComparisonKey, ComparisonRow, ComparisonTable, Measure, Record, Totals, Window,
};

/// Builds the designated-bank and market series from filtered records.
///
/// The market is every filtered row, the designated bank included, summed per
/// window key.
pub struct ComparisonQuery<'a> {
    rows: &'a [&'a Record],
    designated: &'a str,
}

impl<'a> ComparisonQuery<'a> {
    pub fn new(rows: &'a [&'a Record], designated: &'a str) -> Self {
        Self { rows, designated }
    }

    /// Summed columns per window key for the designated bank.
    pub fn designated_totals(&self, window: Window) -> BTreeMap<ComparisonKey, Totals> {
        group(
            self.rows.iter().copied().filter(|r| r.bank_name == self.designated),
            window,
        )
    }

    /// Summed columns per window key across all filtered banks.
    pub fn market_totals(&self, window: Window) -> BTreeMap<ComparisonKey, Totals> {
        group(self.rows.iter().copied(), window)
    }

    /// Designated rows (with their market share in percent) followed by
    /// market rows.
    pub fn table(&self, window: Window, measure: Measure) -> ComparisonTable {
        let market = self.market_totals(window);
        let designated = self.designated_totals(window);

        let mut rows = Vec::with_capacity(market.len() + designated.len());
        for (key, totals) in &designated {
            let mut row = ComparisonRow::new(self.designated, *key, *totals);
            row.share = market
                .get(key)
                .and_then(|m| share(measure.of(totals), measure.of(m)));
            rows.push(row);
        }
        for (key, totals) in &market {
            rows.push(ComparisonRow::new(MARKET_LABEL, *key, *totals));
        }

        ComparisonTable {
            window,
            measure,
            designated: self.designated.to_string(),
            rows,
        }
    }
}

pub fn window_key(record: &Record, window: Window) -> ComparisonKey {
    match window {
        Window::Quarterly => ComparisonKey::Period(record.period_key),
        Window::Yearly => ComparisonKey::Year(record.year),
    }
}

fn group<'r>(
    rows: impl Iterator<Item = &'r Record>,
    window: Window,
) -> BTreeMap<ComparisonKey, Totals> {
    let mut groups: BTreeMap<ComparisonKey, Totals> = BTreeMap::new();
    for record in rows {
        groups.entry(window_key(record, window)).or_default().add(record);
    }
    groups
}

/// `part` as a percentage of `whole`, `None` for a zero whole.
fn share(part: f64, whole: f64) -> Option<f64> {
    if whole == 0.0 {
        None
    } else {
        Some(part * 100.0 / whole)
    }
}
