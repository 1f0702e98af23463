// src/export/fs_utils.rs

use std::fs;
use std::path::Path;

use crate::errors::AppResult;

/// Create the parent directory of an artifact if it does not exist yet.
/// Existing files at the destination are overwritten by the writers.
pub(crate) fn ensure_parent(path: &Path) -> AppResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
