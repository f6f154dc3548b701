//! Filter control options and the bank select-all / clear-all toggle.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::models::{Quarter, Selection};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterOption {
    /// Month-end code shown to the user and sent back as the filter value.
    pub label: String,
    pub value: Quarter,
}

/// Choices offered by each filter control plus their initial values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub years: Vec<i32>,
    pub quarters: Vec<QuarterOption>,
    pub banks: Vec<String>,
    pub initial: Selection,
}

impl FilterOptions {
    /// Options in first-appearance order. The initial selection covers every
    /// year and quarter and those `default_banks` present in the data.
    pub fn from_dataset(dataset: &Dataset, default_banks: &[String]) -> Self {
        let years = dataset.years();
        let quarters = dataset.quarters();
        let banks = dataset.banks();

        let initial = Selection::new(
            years.iter().copied(),
            quarters.iter().copied(),
            default_banks.iter().filter(|b| banks.contains(*b)).cloned(),
        );

        Self {
            years,
            quarters: quarters
                .into_iter()
                .map(|q| QuarterOption {
                    label: q.code().to_string(),
                    value: q,
                })
                .collect(),
            banks,
            initial,
        }
    }

    /// Bank selection after the toggle button was clicked `clicks` times:
    /// odd selects every bank, even clears the selection.
    pub fn toggle_banks(&self, clicks: u64) -> Vec<String> {
        if clicks % 2 == 1 {
            self.banks.clone()
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RawRecord, Record};

    fn record(bank: &str, year: i32, quarter: Quarter) -> Record {
        Record::from_raw(RawRecord {
            bank_name: bank.into(),
            year,
            quarter,
            primary_volume: 1.0,
            interbank_volume: 1.0,
            operation_result: 1.0,
            operation_expense: 1.0,
            primary_count: 1,
            interbank_count: 1,
        })
        .unwrap()
    }

    fn options() -> FilterOptions {
        let ds = Dataset::from_records(vec![
            record("ITAU", 2021, Quarter::Q2),
            record("BB", 2020, Quarter::Q1),
            record("CAIXA", 2021, Quarter::Q1),
        ]);
        FilterOptions::from_dataset(&ds, &["BB".to_string(), "SANTANDER".to_string()])
    }

    #[test]
    fn options_follow_first_appearance() {
        let opts = options();
        assert_eq!(opts.years, vec![2021, 2020]);
        assert_eq!(opts.banks, vec!["ITAU", "BB", "CAIXA"]);
        assert_eq!(opts.quarters[0].label, "06");
        assert_eq!(opts.quarters[1].value, Quarter::Q1);
    }

    #[test]
    fn initial_selection_skips_absent_default_banks() {
        let opts = options();
        assert_eq!(opts.initial.banks.len(), 1);
        assert!(opts.initial.banks.contains("BB"));
        assert_eq!(opts.initial.years.len(), 2);
    }

    #[test]
    fn toggle_uses_click_parity() {
        let opts = options();
        assert!(opts.toggle_banks(0).is_empty());
        assert_eq!(opts.toggle_banks(1).len(), 3);
        assert!(opts.toggle_banks(2).is_empty());
        assert_eq!(opts.toggle_banks(7), opts.banks);
    }
}
