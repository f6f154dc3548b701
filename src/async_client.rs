//! Async wrapper around [`Dashboard`] for use in async runtimes (Tokio, etc.).
//!
//! Loading and every pipeline call run on the blocking thread pool via
//! [`tokio::task::spawn_blocking`]. The dashboard is immutable, so it is
//! shared through an [`Arc`] without a lock.
//!
//! # Example
//!
//! ```no_run
//! use fx_dashboard::{AsyncDashboard, Selection, Quarter};
//!
//! #[tokio::main]
//! async fn main() {
//!     let dash = AsyncDashboard::builder().build().await.unwrap();
//!
//!     let selection = Selection::new([2022], Quarter::ALL, ["BB"]);
//!     let slices = dash.run(move |d| Ok(d.pie(&selection))).await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{DashboardError, Result};
use crate::{Dashboard, Theme};

// ---------------------------------------------------------------------------
// AsyncDashboardBuilder
// ---------------------------------------------------------------------------

/// Builder for an [`AsyncDashboard`]; mirrors [`DashboardBuilder`](crate::DashboardBuilder).
#[derive(Default)]
pub struct AsyncDashboardBuilder {
    data_path: Option<PathBuf>,
    designated_bank: Option<String>,
    default_banks: Option<Vec<String>>,
    major_share_threshold: Option<f64>,
    theme: Option<Theme>,
}

impl AsyncDashboardBuilder {
    pub fn data_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn designated_bank(mut self, bank: impl Into<String>) -> Self {
        self.designated_bank = Some(bank.into());
        self
    }

    pub fn default_banks<I, S>(mut self, banks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_banks = Some(banks.into_iter().map(Into::into).collect());
        self
    }

    pub fn major_share_threshold(mut self, threshold: f64) -> Self {
        self.major_share_threshold = Some(threshold);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Load the data on the blocking pool and build the dashboard.
    pub async fn build(self) -> Result<AsyncDashboard> {
        tokio::task::spawn_blocking(move || {
            let mut builder = Dashboard::builder();
            if let Some(path) = self.data_path {
                builder = builder.data_path(path);
            }
            if let Some(bank) = self.designated_bank {
                builder = builder.designated_bank(bank);
            }
            if let Some(banks) = self.default_banks {
                builder = builder.default_banks(banks);
            }
            if let Some(threshold) = self.major_share_threshold {
                builder = builder.major_share_threshold(threshold);
            }
            if let Some(theme) = self.theme {
                builder = builder.theme(theme);
            }
            Ok(AsyncDashboard::from(builder.build()?))
        })
        .await
        .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncDashboard
// ---------------------------------------------------------------------------

/// Async handle to a shared, immutable [`Dashboard`]. Cheap to clone.
#[derive(Clone)]
pub struct AsyncDashboard {
    inner: Arc<Dashboard>,
}

impl From<Dashboard> for AsyncDashboard {
    fn from(dashboard: Dashboard) -> Self {
        Self {
            inner: Arc::new(dashboard),
        }
    }
}

impl AsyncDashboard {
    pub fn builder() -> AsyncDashboardBuilder {
        AsyncDashboardBuilder::default()
    }

    /// Run a sync dashboard operation on the blocking thread pool.
    ///
    /// The closure receives `&Dashboard`; concurrent calls do not wait on
    /// each other.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Dashboard) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let dashboard = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || f(&dashboard))
            .await
            .map_err(|e| DashboardError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Borrow the dashboard directly, for calls cheap enough to run inline.
    pub fn get(&self) -> &Dashboard {
        &self.inner
    }
}
