//! Readers for artifacts produced by earlier runs.
//!
//! Both extractors are best-effort on purpose: historical dumps may have
//! been hand-edited, so malformed lines are skipped, never fatal, and a
//! missing file simply yields no codes.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::sql::scan::{split_fields, unquote, values_tuple};

/// Position of CODICEPERSONALE inside the roster VALUES tuple.
const CODE_FIELD: usize = 3;

/// Collect the personnel codes present in a prior roster dump.
///
/// Scans the file line by line for roster INSERT statements, splits each
/// VALUES tuple with the quote-aware scanner and takes the fourth field.
/// Returns None when the file is missing or no code survives, so callers
/// can tell "no whitelist" apart from "empty whitelist".
pub fn roster_dump_codes(path: &Path) -> Option<BTreeSet<String>> {
    let file = File::open(path).ok()?;
    let mut codes = BTreeSet::new();

    for line in BufReader::new(file).lines() {
        let Ok(line) = line else { continue };
        let line = line.trim();
        if !line.to_uppercase().starts_with("INSERT INTO DIPENDENTI") {
            continue;
        }
        let Some(tuple) = values_tuple(line) else {
            continue;
        };
        let fields = split_fields(tuple);
        if fields.len() <= CODE_FIELD {
            continue;
        }
        let code = unquote(&fields[CODE_FIELD]);
        if !code.is_empty() && !code.eq_ignore_ascii_case("NULL") {
            codes.insert(code);
        }
    }

    if codes.is_empty() { None } else { Some(codes) }
}

/// Collect the codes already present in a prior single-column export.
///
/// The first row is skipped only when it is the `old_id` header;
/// otherwise it is data. Every non-empty leading cell joins the set.
/// Any read problem collapses to an empty set.
pub fn prior_export_codes(path: &Path) -> BTreeSet<String> {
    let mut codes = BTreeSet::new();

    let Ok(mut reader) = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
    else {
        return codes;
    };

    let mut first = true;
    for record in reader.records() {
        let Ok(record) = record else {
            return BTreeSet::new();
        };
        let cell = record.get(0).unwrap_or("").trim();
        if first {
            first = false;
            if record.len() == 1 && cell.eq_ignore_ascii_case("old_id") {
                continue;
            }
        }
        if !cell.is_empty() {
            codes.insert(cell.to_string());
        }
    }
    codes
}
