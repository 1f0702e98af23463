use chrono::NaiveDate;

/// Typed cell coming back from a source query.
///
/// Both session backends normalize into this enum so the literal encoder
/// and the CSV writer see the same shapes regardless of transport.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Real(f64),
    Text(String),
    Date(NaiveDate),
}

impl SqlValue {
    /// Classify a raw text cell from a tab-separated client output line.
    ///
    /// `NULL` is the client marker for SQL NULL; numeric-looking text is
    /// promoted, and text starting with `YYYY-MM-DD` becomes a date (any
    /// time-of-day suffix is discarded).
    pub fn from_cell(raw: &str) -> SqlValue {
        if raw == "NULL" {
            return SqlValue::Null;
        }
        if let Ok(i) = raw.parse::<i64>() {
            return SqlValue::Int(i);
        }
        if let Ok(r) = raw.parse::<f64>() {
            return SqlValue::Real(r);
        }
        if let Some(d) = date_prefix(raw) {
            return SqlValue::Date(d);
        }
        SqlValue::Text(raw.to_string())
    }

    /// Map a rusqlite cell. Text cells with a date prefix are promoted,
    /// same as the client path.
    pub fn from_sqlite(v: rusqlite::types::Value) -> SqlValue {
        use rusqlite::types::Value;
        match v {
            Value::Null => SqlValue::Null,
            Value::Integer(i) => SqlValue::Int(i),
            Value::Real(r) => SqlValue::Real(r),
            Value::Text(s) => match date_prefix(&s) {
                Some(d) => SqlValue::Date(d),
                None => SqlValue::Text(s),
            },
            Value::Blob(_) => SqlValue::Null,
        }
    }

    /// Text content for fields used in name derivation. Null yields "".
    pub fn text(&self) -> String {
        match self {
            SqlValue::Null => String::new(),
            SqlValue::Int(i) => i.to_string(),
            SqlValue::Real(r) => r.to_string(),
            SqlValue::Text(s) => s.clone(),
            SqlValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    /// Rendering for the CSV artifact: dates as YYYY-MM-DD, NULL as the
    /// empty field, everything else as plain text.
    pub fn csv_field(&self) -> String {
        match self {
            SqlValue::Null => String::new(),
            other => other.text(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

/// Parse a leading `YYYY-MM-DD` out of a text value, if present.
fn date_prefix(s: &str) -> Option<NaiveDate> {
    let head = s.get(..10)?;
    if head.as_bytes().get(4) != Some(&b'-') || head.as_bytes().get(7) != Some(&b'-') {
        return None;
    }
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
