//! DuckDB connection wrapper with CSV registration and query execution.
//!
//! The CSV is introspected first (`DESCRIBE`) so missing columns are reported
//! by name, then read with explicit column types so DuckDB rejects
//! non-numeric values at load time instead of silently reading them as text.

use crate::error::{DashboardError, Result};
use duckdb::{types::ValueRef, Connection as DuckDbConnection};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Wraps an in-memory DuckDB connection and tracks registered tables.
pub struct Connection {
    conn: DuckDbConnection,
    registered_tables: RefCell<HashSet<String>>,
}

impl Connection {
    /// Open an in-memory DuckDB database.
    pub fn new() -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        Ok(Self {
            conn,
            registered_tables: RefCell::new(HashSet::new()),
        })
    }

    /// Execute SQL and return results as a `Vec` of `HashMap`s.
    ///
    /// Each row is represented as a `HashMap<String, serde_json::Value>`.
    pub fn execute(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        let mut stmt = self.conn.prepare(sql)?;

        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows_result = stmt.query(param_values.as_slice())?;

        // Column metadata is only available after execution
        let (column_names, column_count) = {
            let executed = rows_result.as_ref().ok_or_else(|| {
                DashboardError::InvalidArgument("statement was not executed".into())
            })?;
            let names: Vec<String> = executed
                .column_names()
                .into_iter()
                .map(|s| s.to_string())
                .collect();
            (names, executed.column_count())
        };

        let mut out: Vec<HashMap<String, serde_json::Value>> = Vec::new();

        while let Some(row) = rows_result.next()? {
            let mut map = HashMap::with_capacity(column_count);
            for (i, col_name) in column_names.iter().enumerate() {
                map.insert(col_name.clone(), convert_value_ref(row.get_ref(i)?));
            }
            out.push(map);
        }

        Ok(out)
    }

    /// Execute SQL and deserialize each row into type `T`.
    pub fn execute_into<T: DeserializeOwned>(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Vec<T>> {
        let rows = self.execute(sql, params)?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let value = serde_json::Value::Object(
                row.into_iter()
                    .collect::<serde_json::Map<String, serde_json::Value>>(),
            );
            results.push(serde_json::from_value(value)?);
        }
        Ok(results)
    }

    /// Execute SQL and return the first column of the first row.
    ///
    /// Returns `None` if the result set is empty.
    pub fn execute_scalar(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Option<serde_json::Value>> {
        let mut stmt = self.conn.prepare(sql)?;
        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows = stmt.query(param_values.as_slice())?;

        if let Some(row) = rows.next()? {
            Ok(Some(convert_value_ref(row.get_ref(0)?)))
        } else {
            Ok(None)
        }
    }

    /// Return the `(column_name, column_type)` pairs DuckDB detects for a CSV.
    ///
    /// Only the header and a sample of rows are read.
    pub fn describe_csv(&self, csv_path: &Path) -> Result<Vec<(String, String)>> {
        let path_str = sql_path(csv_path);
        let mut stmt = self.conn.prepare(&format!(
            "SELECT column_name, column_type FROM \
             (DESCRIBE SELECT * FROM read_csv('{}', header = true, delim = ','))",
            path_str
        ))?;

        let mut rows = stmt.query([])?;
        let mut schema: Vec<(String, String)> = Vec::new();
        while let Some(row) = rows.next()? {
            let col_name: String = row.get(0)?;
            let col_type: String = row.get(1)?;
            schema.push((col_name, col_type));
        }
        Ok(schema)
    }

    /// Create a DuckDB table from a comma-delimited file with a header row.
    ///
    /// `types` pins the listed columns to DuckDB types; a value that cannot be
    /// converted fails the whole statement.
    pub fn register_table_from_csv(
        &self,
        table_name: &str,
        csv_path: &Path,
        types: &[(&str, &str)],
    ) -> Result<()> {
        let path_str = sql_path(csv_path);
        let mut options = "header = true, delim = ','".to_string();
        if !types.is_empty() {
            let types_sql = types
                .iter()
                .map(|(col, ty)| format!("'{}': '{}'", col.replace('\'', "''"), ty))
                .collect::<Vec<_>>()
                .join(", ");
            options.push_str(&format!(", types = {{{}}}", types_sql));
        }

        self.conn.execute_batch(&format!(
            "DROP TABLE IF EXISTS {}; \
             CREATE TABLE {} AS SELECT * FROM read_csv('{}', {})",
            table_name, table_name, path_str, options
        ))?;
        self.registered_tables
            .borrow_mut()
            .insert(table_name.to_string());
        tracing::debug!(table = table_name, path = %path_str, "registered CSV table");
        Ok(())
    }

    /// Check whether a table has been registered.
    pub fn has_table(&self, name: &str) -> bool {
        self.registered_tables.borrow().contains(name)
    }

    /// Return the names of all registered tables.
    pub fn tables(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registered_tables.borrow().iter().cloned().collect();
        names.sort();
        names
    }

    /// Access the underlying DuckDB connection for advanced usage.
    pub fn raw(&self) -> &DuckDbConnection {
        &self.conn
    }
}

/// Forward slashes and doubled quotes so the path is a valid SQL literal.
fn sql_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/").replace('\'', "''")
}

/// Convert a DuckDB `ValueRef` to a `serde_json::Value`.
fn convert_value_ref(val: ValueRef<'_>) -> serde_json::Value {
    match val {
        ValueRef::Null => serde_json::Value::Null,
        ValueRef::Boolean(b) => serde_json::Value::Bool(b),
        ValueRef::TinyInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::SmallInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::Int(n) => serde_json::Value::Number(n.into()),
        ValueRef::BigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::UTinyInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::USmallInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::UInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::UBigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::HugeInt(n) => {
            // SUM over BIGINT yields HUGEINT
            if let Ok(i) = i64::try_from(n) {
                serde_json::Value::Number(i.into())
            } else {
                serde_json::Value::String(n.to_string())
            }
        }
        ValueRef::Float(f) => serde_json::Number::from_f64(f as f64)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Double(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Text(bytes) => {
            serde_json::Value::String(String::from_utf8_lossy(bytes).to_string())
        }
        _ => serde_json::Value::Null,
    }
}
