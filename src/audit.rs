//! Audit of produced roster artifacts: verifies that every NOME value
//! landed in collapsed form. Read-only; used by `orarisync check`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::Regex;

use crate::errors::AppResult;
use crate::export;
use crate::sql::scan::{split_fields, unquote};
use crate::stages::ROSTER_STEM;
use crate::utils::{collapse_spaces, is_collapsed};

/// NOME position inside the roster VALUES tuple.
const NOME_FIELD: usize = 1;

#[derive(Debug)]
pub struct Issue {
    pub location: String,
    pub found: String,
}

impl Issue {
    fn new(location: String, found: &str) -> Self {
        Issue {
            location,
            found: found.to_string(),
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "{}: NOME not normalized: >{}< -> >{}<",
            self.location,
            self.found,
            collapse_spaces(&self.found)
        )
    }
}

/// Scan both roster artifacts under `base` and collect every NOME that
/// is not whitespace-normalized. Missing artifacts are not an error.
pub fn scan_roster_artifacts(base: &Path) -> AppResult<Vec<Issue>> {
    let mut issues = Vec::new();
    scan_dump(&export::dump_path(base, ROSTER_STEM), &mut issues)?;
    scan_csv(&export::csv_path(base, ROSTER_STEM), &mut issues)?;
    Ok(issues)
}

fn scan_dump(path: &Path, issues: &mut Vec<Issue>) -> AppResult<()> {
    if !path.exists() {
        return Ok(());
    }
    let values_re = Regex::new(r"(?i)VALUES\s*\((.*)\)\s*;").expect("static regex");

    for (lineno, line) in BufReader::new(File::open(path)?).lines().enumerate() {
        let line = line?;
        if !line.trim().to_uppercase().starts_with("INSERT INTO DIPENDENTI") {
            continue;
        }
        let Some(caps) = values_re.captures(&line) else {
            continue;
        };
        let fields = split_fields(&caps[1]);
        if fields.len() <= NOME_FIELD {
            continue;
        }
        let nome = unquote(&fields[NOME_FIELD]);
        if !is_collapsed(&nome) {
            issues.push(Issue::new(format!("SQL line {}", lineno + 1), &nome));
        }
    }
    Ok(())
}

fn scan_csv(path: &Path, issues: &mut Vec<Issue>) -> AppResult<()> {
    if !path.exists() {
        return Ok(());
    }
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| crate::errors::AppError::Other(format!("CSV read error: {e}")))?;

    let nome_idx = reader
        .headers()
        .ok()
        .and_then(|h| h.iter().position(|c| c == "NOME"));
    let Some(nome_idx) = nome_idx else {
        return Ok(());
    };

    for (rowno, record) in reader.records().enumerate() {
        let Ok(record) = record else { continue };
        let nome = record.get(nome_idx).unwrap_or("");
        if !is_collapsed(nome) {
            // Header is row 1.
            issues.push(Issue::new(format!("CSV row {}", rowno + 2), nome));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn flags_unnormalized_names_in_both_artifacts() {
        let base = env::temp_dir().join("orarisync_audit");
        fs::remove_dir_all(&base).ok();
        fs::create_dir_all(base.join("dump")).unwrap();
        fs::create_dir_all(base.join("csv")).unwrap();

        fs::write(
            base.join("dump").join("orari.dipendenti.sql"),
            "INSERT INTO dipendenti (Neg, NOME) VALUES ('A1', 'Mario Rossi');\n\
             INSERT INTO dipendenti (Neg, NOME) VALUES ('B2', ' Luigi  Verdi');\n",
        )
        .unwrap();
        fs::write(
            base.join("csv").join("orari.dipendenti.csv"),
            "Neg,NOME\nA1,Mario Rossi\nB2,Luigi  Verdi\n",
        )
        .unwrap();

        let issues = scan_roster_artifacts(&base).unwrap();
        assert_eq!(issues.len(), 2);
        assert!(issues[0].describe().contains("SQL line 2"));
        assert!(issues[1].describe().contains("CSV row 3"));

        fs::remove_dir_all(base).ok();
    }

    #[test]
    fn missing_artifacts_are_clean() {
        let base = env::temp_dir().join("orarisync_audit_missing");
        fs::remove_dir_all(&base).ok();
        assert!(scan_roster_artifacts(&base).unwrap().is_empty());
    }
}
