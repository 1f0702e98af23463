// src/export/csv.rs

use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::export::Dataset;

/// Write the CSV artifact: header row equal to the column list, then one
/// row per record in the same order as the SQL dump.
pub(crate) fn write_table(path: &Path, dataset: &Dataset) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(dataset.columns)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in &dataset.rows {
        let fields: Vec<String> = row.iter().map(|v| v.csv_field()).collect();
        wtr.write_record(&fields)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    Ok(())
}
