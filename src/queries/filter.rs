//! Year / quarter / bank filtering over the loaded dataset.

use crate::dataset::Dataset;
use crate::models::{Record, Selection};

/// Selects the records matching a [`Selection`].
pub struct FilterQuery<'a> {
    dataset: &'a Dataset,
}

impl<'a> FilterQuery<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Records whose year, quarter and bank are all selected, in source order.
    ///
    /// An empty set in any dimension yields no rows.
    pub fn apply(&self, selection: &Selection) -> Vec<&'a Record> {
        if selection.is_empty() {
            return Vec::new();
        }
        self.dataset
            .records()
            .iter()
            .filter(|r| selection.matches(r))
            .collect()
    }

    pub fn count(&self, selection: &Selection) -> usize {
        self.apply(selection).len()
    }
}
