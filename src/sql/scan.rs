//! Finite-state scanner for the VALUES tuple of a dump INSERT line.
//!
//! Grammar is the one the literal encoder writes: fields separated by
//! top-level commas, quoted literals delimited by single quotes with
//! embedded quotes doubled. The scanner toggles in and out of the quoted
//! state; commas inside a quoted span are not separators.

/// Scanner state while walking a tuple.
#[derive(Clone, Copy, PartialEq)]
enum State {
    Bare,
    Quoted,
}

/// Extract the `(...)` tuple body following the VALUES keyword, or None
/// when the line does not carry one.
pub fn values_tuple(line: &str) -> Option<&str> {
    let idx = line.find("VALUES")?;
    let rest = line[idx + "VALUES".len()..].trim();
    let body = rest.strip_prefix('(')?;
    if let Some(stripped) = body.strip_suffix(");") {
        return Some(stripped);
    }
    body.strip_suffix(')')
}

/// Split a tuple body into its top-level fields, trimmed, quotes kept.
pub fn split_fields(tuple: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut state = State::Bare;

    for ch in tuple.chars() {
        match (state, ch) {
            (State::Bare, '\'') => {
                state = State::Quoted;
                current.push(ch);
            }
            (State::Quoted, '\'') => {
                state = State::Bare;
                current.push(ch);
            }
            (State::Bare, ',') => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            (_, ch) => current.push(ch),
        }
    }
    if !current.trim().is_empty() {
        fields.push(current.trim().to_string());
    }
    fields
}

/// Strip the quotes of a scanned field and collapse doubled quotes back
/// to one. Unquoted fields (numbers, NULL) come back unchanged.
pub fn unquote(field: &str) -> String {
    let trimmed = field.trim();
    match trimmed
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
    {
        Some(inner) => inner.replace("''", "'"),
        None => trimmed.to_string(),
    }
}
