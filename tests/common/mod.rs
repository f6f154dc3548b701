//! Shared test fixtures for the dashboard integration tests.
//!
//! Provides `setup_sample()` which writes a small operations CSV into a temp
//! directory and loads it through the real [`Loader`].

#![allow(dead_code)]

use fx_dashboard::{Dashboard, Dataset, Loader};
use std::path::{Path, PathBuf};

pub const HEADER: &str = "NOME_BANCO,ANO,TRIMESTRE,VOLUME_OP,VOLUME_INTERBANK,RESULT_OP,DESPESA_OP,NUMERO_OP,NUMERO_INTERBANK";

/// 2020 Q1 has six banks with `total_count` {100, 90, 80, 70, 5, 3}.
/// Y 2020 Q1 has a zero result and BRADESCO 2020 Q2 a negative one.
pub const SAMPLE_ROWS: &[&str] = &[
    "BB,2020,1,1000000,500000,2000,-500,90,10",
    "ITAU,2020,1,900000,300000,1500,-300,80,10",
    "BRADESCO,2020,1,800000,200000,1000,-200,75,5",
    "SANTANDER,2020,1,700000,100000,900,-100,70,0",
    "X,2020,1,50000,0,100,0,5,0",
    "Y,2020,1,30000,0,0,0,3,0",
    "BB,2020,2,1100000,400000,2500,-500,110,10",
    "ITAU,2020,2,1000000,200000,2000,-400,100,0",
    "BRADESCO,2020,2,600000,100000,-100,-50,60,0",
    "BB,2021,1,1200000,600000,3000,-1000,130,20",
    "ITAU,2021,1,1100000,500000,2500,-500,120,10",
    "SANTANDER,2021,3,500000,50000,800,-200,40,5",
];

/// Write `header` followed by `rows` to `dir/name` and return the path.
pub fn write_csv(dir: &Path, name: &str, header: &str, rows: &[&str]) -> PathBuf {
    let mut contents = String::from(header);
    contents.push('\n');
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Load the sample CSV. Returns the loader too, so tests can query the raw
/// DuckDB table. The caller must keep the `TempDir` alive.
pub fn setup_sample() -> (Loader, Dataset, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = write_csv(tmp_dir.path(), "spread.csv", HEADER, SAMPLE_ROWS);
    let loader = Loader::new().unwrap();
    let dataset = loader.load(&path).unwrap();
    (loader, dataset, tmp_dir)
}

pub fn setup_dashboard() -> (Dashboard, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = write_csv(tmp_dir.path(), "spread.csv", HEADER, SAMPLE_ROWS);
    let dashboard = Dashboard::builder().data_path(&path).build().unwrap();
    (dashboard, tmp_dir)
}
