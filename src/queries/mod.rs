//! Pure query stages of the dashboard pipeline.
//!
//! [`FilterQuery`] borrows the [`Dataset`](crate::dataset::Dataset) and yields
//! the selected records; every other query borrows that filtered slice and
//! builds one value table from it. None of them mutate their input.

pub mod comparison;
pub mod filter;
pub mod options;
pub mod pie;
pub mod series;
pub mod table;

pub use comparison::ComparisonQuery;
pub use filter::FilterQuery;
pub use options::{FilterOptions, QuarterOption};
pub use pie::{PieQuery, PieSlice};
pub use series::SeriesQuery;
pub use table::TableQuery;
