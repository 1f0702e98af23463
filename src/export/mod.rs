// src/export/mod.rs

mod csv;
mod fs_utils;
mod sql;

use std::path::{Path, PathBuf};

use crate::errors::AppResult;
use crate::models::value::SqlValue;
use crate::ui::messages::info;

/// One dataset headed for the paired SQL dump + CSV artifacts.
///
/// Rows are kept in the order the upstream query produced them and both
/// serializers walk the same rows with the same column list, so the two
/// files stay row-for-row and column-for-column identical.
pub struct Dataset<'a> {
    /// Destination table of the INSERT statements.
    pub table: &'a str,
    /// Schema-definition statement written at the top of the dump.
    pub schema: &'a str,
    /// Ordered column list, shared by INSERTs and the CSV header.
    pub columns: &'a [&'a str],
    pub rows: Vec<Vec<SqlValue>>,
}

/// Relative directory of the SQL dump artifacts.
pub const DUMP_DIR: &str = "dump";
/// Relative directory of the CSV artifacts.
pub const CSV_DIR: &str = "csv";

pub fn dump_path(base: &Path, stem: &str) -> PathBuf {
    base.join(DUMP_DIR).join(format!("{stem}.sql"))
}

pub fn csv_path(base: &Path, stem: &str) -> PathBuf {
    base.join(CSV_DIR).join(format!("{stem}.csv"))
}

/// Serialize the dataset into both artifacts under `base`.
///
/// Creates the destination directories when missing and overwrites any
/// existing files. Returns the written paths for operator messages.
pub fn export_pair(base: &Path, stem: &str, dataset: &Dataset) -> AppResult<(PathBuf, PathBuf)> {
    let sql_file = dump_path(base, stem);
    let csv_file = csv_path(base, stem);
    fs_utils::ensure_parent(&sql_file)?;
    fs_utils::ensure_parent(&csv_file)?;

    self::sql::write_dump(&sql_file, dataset)?;
    self::csv::write_table(&csv_file, dataset)?;

    info(format!(
        "{} rows exported to {} and {}",
        dataset.rows.len(),
        sql_file.display(),
        csv_file.display()
    ));
    Ok((sql_file, csv_file))
}
