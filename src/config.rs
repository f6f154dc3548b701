use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "data/spread.csv";
pub const DATA_PATH_ENV: &str = "FX_DASHBOARD_DATA";
pub const BIND_ADDR_ENV: &str = "FX_DASHBOARD_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8050";

pub const DEFAULT_DESIGNATED_BANK: &str = "BB";
pub const DEFAULT_BANKS: [&str; 4] = ["BB", "ITAU", "BRADESCO", "SANTANDER"];

/// Banks whose share of the operation count is below this go to "Other".
pub const MAJOR_SHARE_THRESHOLD: f64 = 0.05;
pub const OTHER_LABEL: &str = "Other";
pub const MARKET_LABEL: &str = "Market";

/// Result line chart point text is shown in millions.
pub const RESULT_SCALE: f64 = 1_000_000.0;
/// Comparison bars are shown in thousands of operations.
pub const COUNT_SCALE: f64 = 1_000.0;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Name of the DuckDB table the raw CSV is loaded into.
pub const RAW_TABLE: &str = "raw_operations";

/// Required CSV header names paired with the DuckDB type they are read as
/// and the field name they are exposed under.
pub fn source_columns() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("NOME_BANCO", "VARCHAR", "bank_name"),
        ("ANO", "INTEGER", "year"),
        ("TRIMESTRE", "INTEGER", "quarter"),
        ("VOLUME_OP", "DOUBLE", "primary_volume"),
        ("VOLUME_INTERBANK", "DOUBLE", "interbank_volume"),
        ("RESULT_OP", "DOUBLE", "operation_result"),
        ("DESPESA_OP", "DOUBLE", "operation_expense"),
        ("NUMERO_OP", "BIGINT", "primary_count"),
        ("NUMERO_INTERBANK", "BIGINT", "interbank_count"),
    ]
}

/// Data file location: `FX_DASHBOARD_DATA` if set, otherwise `data/spread.csv`.
pub fn default_data_path() -> PathBuf {
    match std::env::var(DATA_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_DATA_PATH),
    }
}

/// Server bind address: `FX_DASHBOARD_ADDR` if set, otherwise `0.0.0.0:8050`.
pub fn bind_addr() -> String {
    match std::env::var(BIND_ADDR_ENV) {
        Ok(addr) if !addr.trim().is_empty() => addr,
        _ => DEFAULT_BIND_ADDR.to_string(),
    }
}
