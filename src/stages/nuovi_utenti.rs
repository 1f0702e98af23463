//! Stage 2: remote pre-seed list.
//!
//! Pulls the already-provisioned account codes from the remote source
//! and persists them as a single-column CSV. The next incremental export
//! reads this file back as its exclude set.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export;
use crate::source;
use crate::stages::PRESEED_STEM;
use crate::ui::messages::info;

pub const PRESEED_QUERY: &str = "SELECT old_id FROM gestione_utenti;";

/// Sole header of the pre-seed CSV; the prior-export reader matches on
/// it when deciding whether the first row is data.
pub const PRESEED_HEADER: &str = "old_id";

pub fn run(db_override: Option<&str>, cfg: &Config) -> AppResult<()> {
    let rows = {
        let mut session = source::open_remote(db_override, cfg)?;
        session.execute(PRESEED_QUERY)?
    };
    info(format!("pre-seed query returned {} rows", rows.len()));

    let out = export::csv_path(&cfg.base_dir, PRESEED_STEM);
    if let Some(dir) = out.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let mut wtr = csv::Writer::from_path(&out)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;
    wtr.write_record([PRESEED_HEADER])
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    let mut written = 0usize;
    for row in rows {
        // One logical record per line; only the leading cell matters.
        let Some(first) = row.first() else { continue };
        let code = first.text();
        let code = code.trim();
        if code.is_empty() {
            continue;
        }
        wtr.write_record([code])
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
        written += 1;
    }
    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    info(format!("{} codes written to {}", written, out.display()));
    Ok(())
}
