//! Foreign-exchange operations dashboard for Rust.
//!
//! Loads a per-bank, per-quarter FX operations CSV through DuckDB into an
//! immutable [`Dataset`], then builds the value tables behind the dashboard's
//! charts: per-bank result and spread lines, an operation-count pie with a
//! long-tail "Other" bucket, a designated-bank-versus-market comparison, and
//! a sortable, paginated table.
//!
//! # Quick start
//!
//! ```no_run
//! use fx_dashboard::{Dashboard, Selection, Quarter, Window};
//!
//! let dash = Dashboard::builder().data_path("data/spread.csv").build().unwrap();
//!
//! let selection = Selection::new([2022], Quarter::ALL, ["BB", "ITAU"]);
//! let rows = dash.filter(&selection);
//! let comparison = dash.comparison(&selection, Window::Yearly);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod charts;
pub mod config;
pub mod connection;
pub mod dataset;
pub mod dispatch;
pub mod error;
pub mod loader;
pub mod models;
pub mod queries;
pub mod sql_builder;
pub mod theme;

#[cfg(feature = "async")]
pub use async_client::AsyncDashboard;
pub use charts::Charts;
pub use connection::Connection;
pub use dataset::Dataset;
pub use dispatch::{Control, Rendered, ViewState, Visual};
pub use error::{DashboardError, Result};
pub use loader::Loader;
pub use models::{
    ComparisonTable, Figures, Measure, Quarter, Record, Selection, TableRequest, Window,
};
pub use queries::{FilterOptions, PieSlice};
pub use sql_builder::SqlBuilder;
pub use theme::Theme;

use std::fmt;
use std::path::{Path, PathBuf};

use config::{DEFAULT_BANKS, DEFAULT_DESIGNATED_BANK, MAJOR_SHARE_THRESHOLD};
use queries::{ComparisonQuery, FilterQuery, PieQuery};

// ---------------------------------------------------------------------------
// DashboardBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Dashboard`].
///
/// Use [`Dashboard::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](DashboardBuilder::build) to load the data.
pub struct DashboardBuilder {
    data_path: Option<PathBuf>,
    designated_bank: String,
    default_banks: Vec<String>,
    major_share_threshold: f64,
    theme: Theme,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self {
            data_path: None,
            designated_bank: DEFAULT_DESIGNATED_BANK.to_string(),
            default_banks: DEFAULT_BANKS.iter().map(|b| b.to_string()).collect(),
            major_share_threshold: MAJOR_SHARE_THRESHOLD,
            theme: Theme::default(),
        }
    }
}

impl DashboardBuilder {
    /// Set the CSV file to load.
    ///
    /// If not set, `FX_DASHBOARD_DATA` is used, falling back to
    /// `data/spread.csv`.
    pub fn data_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Bank compared against the market. Defaults to `"BB"`.
    pub fn designated_bank(mut self, bank: impl Into<String>) -> Self {
        self.designated_bank = bank.into();
        self
    }

    /// Banks selected when the dashboard first opens.
    pub fn default_banks<I, S>(mut self, banks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_banks = banks.into_iter().map(Into::into).collect();
        self
    }

    /// Share below which a bank is folded into the pie's "Other" slice.
    ///
    /// Defaults to `0.05`.
    pub fn major_share_threshold(mut self, threshold: f64) -> Self {
        self.major_share_threshold = threshold;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Load the CSV and build the dashboard.
    ///
    /// Any problem with the file is an error here; nothing is re-read later.
    pub fn build(self) -> Result<Dashboard> {
        let path = self
            .data_path
            .clone()
            .unwrap_or_else(config::default_data_path);
        let dataset = Loader::new()?.load(&path)?;
        self.build_with_dataset(dataset)
    }

    /// Build around an already loaded (or hand-made) dataset.
    pub fn build_with_dataset(self, dataset: Dataset) -> Result<Dashboard> {
        if !(0.0..=1.0).contains(&self.major_share_threshold) {
            return Err(DashboardError::InvalidArgument(format!(
                "major share threshold must be within 0..=1, got {}",
                self.major_share_threshold
            )));
        }
        if dataset.total_count().is_none() {
            return Err(DashboardError::InvalidData(
                "summed operation counts overflow".into(),
            ));
        }
        if self.designated_bank.trim().is_empty() {
            return Err(DashboardError::InvalidArgument(
                "designated bank must not be empty".into(),
            ));
        }
        if !dataset.banks().contains(&self.designated_bank) {
            tracing::warn!(
                bank = %self.designated_bank,
                "designated bank does not appear in the dataset"
            );
        }
        Ok(Dashboard {
            dataset,
            settings: Settings {
                designated_bank: self.designated_bank,
                default_banks: self.default_banks,
                major_share_threshold: self.major_share_threshold,
                theme: self.theme,
            },
        })
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub designated_bank: String,
    pub default_banks: Vec<String>,
    pub major_share_threshold: f64,
    pub theme: Theme,
}

/// The main entry point: the loaded dataset plus its settings.
///
/// Immutable after construction, so a single instance can be shared across
/// threads (e.g. in an `Arc`) and queried concurrently. Every method is a
/// pure function of the dataset and its arguments.
#[derive(Debug)]
pub struct Dashboard {
    dataset: Dataset,
    settings: Settings,
}

impl Dashboard {
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::default()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Filter choices and the initial selection.
    pub fn options(&self) -> FilterOptions {
        FilterOptions::from_dataset(&self.dataset, &self.settings.default_banks)
    }

    /// Bank selection after `clicks` presses of the select-all / clear-all button.
    pub fn toggle_banks(&self, clicks: u64) -> Vec<String> {
        self.options().toggle_banks(clicks)
    }

    /// Records matching the selection, in source order.
    pub fn filter(&self, selection: &Selection) -> Vec<&Record> {
        FilterQuery::new(&self.dataset).apply(selection)
    }

    /// Pie slices after long-tail bucketing.
    pub fn pie(&self, selection: &Selection) -> Vec<PieSlice> {
        let rows = self.filter(selection);
        PieQuery::new(&rows).slices(self.settings.major_share_threshold)
    }

    /// Designated bank versus market, share computed on operation counts.
    pub fn comparison(&self, selection: &Selection, window: Window) -> ComparisonTable {
        self.comparison_by(selection, window, Measure::Count)
    }

    pub fn comparison_by(
        &self,
        selection: &Selection,
        window: Window,
        measure: Measure,
    ) -> ComparisonTable {
        let rows = self.filter(selection);
        ComparisonQuery::new(&rows, &self.settings.designated_bank).table(window, measure)
    }

    /// Recompute a single visual for the given control values.
    pub fn render(&self, visual: Visual, state: &ViewState) -> Result<Rendered> {
        let rows = self.filter(&state.selection);
        let charts = Charts::new(&rows, &self.settings.theme);
        let rendered = match visual {
            Visual::ResultLine => Rendered::Line(charts.result_line()),
            Visual::SpreadLine => Rendered::Line(charts.spread_line()),
            Visual::Pie => Rendered::Pie(charts.pie(self.settings.major_share_threshold)),
            Visual::Comparison => Rendered::Comparison(
                charts.comparison(&self.settings.designated_bank, state.window),
            ),
            Visual::Table => Rendered::Table(charts.table(&state.table)?),
        };
        tracing::debug!(visual = %visual, rows = rows.len(), "rendered visual");
        Ok(rendered)
    }

    /// Every visual at once, filtering a single time.
    pub fn figures(&self, state: &ViewState) -> Result<Figures> {
        let rows = self.filter(&state.selection);
        let charts = Charts::new(&rows, &self.settings.theme);
        Ok(Figures {
            result_line: charts.result_line(),
            spread_line: charts.spread_line(),
            pie: charts.pie(self.settings.major_share_threshold),
            comparison: charts.comparison(&self.settings.designated_bank, state.window),
            table: charts.table(&state.table)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = self
            .dataset
            .source()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string());
        write!(
            f,
            "Dashboard(source={}, rows={}, banks=[{}], designated={})",
            source,
            self.dataset.len(),
            self.dataset.banks().join(", "),
            self.settings.designated_bank
        )
    }
}
