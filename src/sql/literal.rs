//! SQL literal rendering for the dump artifacts.
//!
//! One fixed grammar, shared with the tuple scanner in `sql::scan`:
//! what this module writes, the scanner must read back. Keep the two in
//! sync when touching either.

use crate::models::value::SqlValue;

/// Render a typed value as a SQL literal for an INSERT statement.
///
/// NULL for absent values, plain numeric text for numbers, quoted
/// `YYYY-MM-DD` for dates (time-of-day discarded), quoted text with
/// doubled single quotes for everything else.
pub fn literal(value: &SqlValue) -> String {
    match value {
        SqlValue::Null => "NULL".to_string(),
        SqlValue::Int(i) => i.to_string(),
        SqlValue::Real(r) => r.to_string(),
        SqlValue::Date(d) => format!("'{}'", d.format("%Y-%m-%d")),
        SqlValue::Text(s) => quoted(s),
    }
}

/// Quote a text value, doubling embedded single quotes. No other escaping.
pub fn quoted(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
