//! The immutable, normalized source table.

use std::collections::HashSet;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use crate::models::{Quarter, Record};

/// Normalized records in source-file order.
///
/// Built once at startup and never mutated afterwards; every query borrows it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    source: Option<PathBuf>,
}

impl Dataset {
    pub fn new(records: Vec<Record>, source: Option<PathBuf>) -> Self {
        Self { records, source }
    }

    /// A dataset that was not read from a file.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self::new(records, None)
    }

    /// Sum of `total_count` over every record, `None` on overflow.
    ///
    /// Counts are non-negative, so any filtered subset sums without overflow
    /// when this is `Some`.
    pub fn total_count(&self) -> Option<i64> {
        self.records
            .iter()
            .try_fold(0i64, |acc, r| acc.checked_add(r.total_count))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path the data was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Distinct years in first-appearance order.
    pub fn years(&self) -> Vec<i32> {
        unique(self.records.iter().map(|r| r.year))
    }

    /// Distinct quarters in first-appearance order.
    pub fn quarters(&self) -> Vec<Quarter> {
        unique(self.records.iter().map(|r| r.quarter))
    }

    /// Distinct bank names in first-appearance order.
    pub fn banks(&self) -> Vec<String> {
        unique(self.records.iter().map(|r| r.bank_name.clone()))
    }
}

fn unique<T: Eq + Hash + Clone>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(v.clone())).collect()
}
