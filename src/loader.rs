//! One-shot CSV loader: introspect, type, validate, derive.
//!
//! Any problem with the source file is returned as an error from
//! [`Loader::load`]; callers treat it as fatal at startup.

use std::path::Path;

use serde::Deserialize;

use crate::config::{source_columns, RAW_TABLE};
use crate::connection::Connection;
use crate::dataset::Dataset;
use crate::error::{DashboardError, Result};
use crate::models::{RawRecord, Record};
use crate::sql_builder::SqlBuilder;

/// Reads the operations CSV through DuckDB and builds a [`Dataset`].
///
/// The raw table stays registered on the loader's connection, so it can be
/// queried with [`SqlBuilder`] after loading.
pub struct Loader {
    conn: Connection,
}

impl Loader {
    pub fn new() -> Result<Self> {
        Ok(Self {
            conn: Connection::new()?,
        })
    }

    /// Load, validate and normalize the file at `path`.
    pub fn load(&self, path: &Path) -> Result<Dataset> {
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(DashboardError::InvalidData(format!(
                "{} is not a file",
                path.display()
            )));
        }

        let schema = self.conn.describe_csv(path)?;
        check_required_columns(&schema)?;

        let types: Vec<(&str, &str)> = source_columns()
            .into_iter()
            .map(|(col, ty, _)| (col, ty))
            .collect();
        self.conn
            .register_table_from_csv(RAW_TABLE, path, &types)
            .map_err(|e| DashboardError::InvalidData(format!("{}: {}", path.display(), e)))?;

        self.validate()?;

        let select: Vec<String> = source_columns()
            .into_iter()
            .map(|(col, _, field)| format!("\"{}\" AS {}", col, field))
            .collect();
        let (sql, params) = SqlBuilder::new(RAW_TABLE).select_owned(select).build();
        let raw: Vec<RawRecord> = self.conn.execute_into(&sql, &params)?;

        let records = raw
            .into_iter()
            .map(Record::from_raw)
            .collect::<Result<Vec<_>>>()?;

        let dataset = Dataset::new(records, Some(path.to_path_buf()));
        if dataset.total_count().is_none() {
            return Err(DashboardError::InvalidData(format!(
                "{}: summed operation counts overflow",
                path.display()
            )));
        }
        if tracing::enabled!(tracing::Level::DEBUG) {
            for (bank, rows) in self.bank_row_counts()? {
                tracing::debug!(%bank, rows, "bank rows");
            }
        }
        tracing::info!(
            path = %path.display(),
            rows = dataset.len(),
            banks = dataset.banks().len(),
            years = dataset.years().len(),
            "loaded operations dataset"
        );
        Ok(dataset)
    }

    /// The DuckDB connection holding the raw table.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Raw row count per bank, ordered by bank name.
    pub fn bank_row_counts(&self) -> Result<Vec<(String, i64)>> {
        let (sql, params) = SqlBuilder::new(RAW_TABLE)
            .select(&["\"NOME_BANCO\" AS bank", "COUNT(*) AS n"])
            .group_by(&["\"NOME_BANCO\""])
            .order_by(&["bank ASC"])
            .build();
        let rows: Vec<BankRows> = self.conn.execute_into(&sql, &params)?;
        Ok(rows.into_iter().map(|r| (r.bank, r.n)).collect())
    }

    fn validate(&self) -> Result<()> {
        for (col, ty, _) in source_columns() {
            let blanks = self.count_where(&format!("\"{}\" IS NULL", col))?;
            if blanks > 0 {
                return Err(DashboardError::InvalidData(format!(
                    "column {} has {} blank value(s)",
                    col, blanks
                )));
            }
            if ty == "DOUBLE" {
                let non_finite = self.count_where(&format!("NOT isfinite(\"{}\")", col))?;
                if non_finite > 0 {
                    return Err(DashboardError::InvalidData(format!(
                        "column {} has {} infinite or NaN value(s)",
                        col, non_finite
                    )));
                }
            }
        }

        let total = self.count(SqlBuilder::new(RAW_TABLE).select(&["COUNT(*)"]))?;
        let in_range = self.count(
            SqlBuilder::new(RAW_TABLE)
                .select(&["COUNT(*)"])
                .where_in("CAST(\"TRIMESTRE\" AS VARCHAR)", &["1", "2", "3", "4"]),
        )?;
        if in_range < total {
            return Err(DashboardError::InvalidData(format!(
                "{} row(s) have a TRIMESTRE outside 1..=4",
                total - in_range
            )));
        }

        let negative_counts = self.count_where("\"NUMERO_OP\" < 0 OR \"NUMERO_INTERBANK\" < 0")?;
        if negative_counts > 0 {
            return Err(DashboardError::InvalidData(format!(
                "{} row(s) have a negative operation count",
                negative_counts
            )));
        }

        Ok(())
    }

    fn count_where(&self, condition: &str) -> Result<i64> {
        self.count(
            SqlBuilder::new(RAW_TABLE)
                .select(&["COUNT(*)"])
                .where_clause(condition, &[]),
        )
    }

    fn count(&self, query: &SqlBuilder) -> Result<i64> {
        let (sql, params) = query.build();
        Ok(self
            .conn
            .execute_scalar(&sql, &params)?
            .and_then(|v| v.as_i64())
            .unwrap_or(0))
    }
}

#[derive(Deserialize)]
struct BankRows {
    bank: String,
    n: i64,
}

fn check_required_columns(schema: &[(String, String)]) -> Result<()> {
    for (col, _, _) in source_columns() {
        if !schema.iter().any(|(name, _)| name == col) {
            return Err(DashboardError::MissingColumn(col.to_string()));
        }
    }
    Ok(())
}
