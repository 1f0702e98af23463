pub mod check;
pub mod dipendenti;
pub mod gestione_utenti;
pub mod nuovi_utenti;
pub mod run;

use crate::chain::report::StageReport;
use crate::errors::AppResult;
use crate::ui::messages::{error, success};

/// Collapse a stage result into the status record on stdout.
///
/// Whatever failed inside the stage, only the record crosses the process
/// boundary; the detail stays on stderr for the operator. The non-zero
/// exit code is advisory.
pub(crate) fn finish_stage(name: &str, result: AppResult<()>) -> AppResult<()> {
    match result {
        Ok(()) => {
            success(format!("stage '{name}' completed"));
            StageReport::success().emit();
            Ok(())
        }
        Err(e) => {
            error(format!("stage '{name}' failed: {e}"));
            StageReport::failure(&e).emit();
            std::process::exit(1);
        }
    }
}
