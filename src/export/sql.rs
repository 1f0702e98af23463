// src/export/sql.rs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::AppResult;
use crate::export::Dataset;
use crate::sql::literal::literal;

/// Write the SQL dump: schema statement, unconditional delete-all, then
/// one INSERT per row with values in declared column order.
pub(crate) fn write_dump(path: &Path, dataset: &Dataset) -> AppResult<()> {
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "{}", dataset.schema)?;
    writeln!(out)?;
    writeln!(out, "DELETE FROM {};", dataset.table)?;
    writeln!(out)?;

    let columns = dataset.columns.join(", ");
    for row in &dataset.rows {
        let values = row.iter().map(literal).collect::<Vec<_>>().join(", ");
        writeln!(
            out,
            "INSERT INTO {} ({}) VALUES ({});",
            dataset.table, columns, values
        )?;
    }

    out.flush()?;
    Ok(())
}
