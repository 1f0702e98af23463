//! Builds the selection predicate that scopes an incremental export to
//! new or permitted personnel codes.

use std::collections::BTreeSet;

use crate::sql::literal::quoted;

/// Render the WHERE clause for a whitelist/exclude code-set pair.
///
/// Both sets present: code must be in the whitelist and not excluded.
/// One set present: that condition alone. Neither: no predicate.
/// Codes are rendered in lexicographic order so the generated text is
/// deterministic across runs.
pub fn build_predicate(
    whitelist: Option<&BTreeSet<String>>,
    exclude: &BTreeSet<String>,
) -> Option<String> {
    let whitelist = whitelist.filter(|w| !w.is_empty());
    let exclude = (!exclude.is_empty()).then_some(exclude);

    match (whitelist, exclude) {
        (Some(w), Some(x)) => Some(format!(
            "WHERE Codice IN ({}) AND Codice NOT IN ({})",
            quoted_list(w),
            quoted_list(x)
        )),
        (Some(w), None) => Some(format!("WHERE Codice IN ({})", quoted_list(w))),
        (None, Some(x)) => Some(format!("WHERE Codice NOT IN ({})", quoted_list(x))),
        (None, None) => None,
    }
}

fn quoted_list(codes: &BTreeSet<String>) -> String {
    codes
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(codes: &[&str]) -> BTreeSet<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn both_sets_combine() {
        let w = set(&["002", "001"]);
        let x = set(&["001"]);
        assert_eq!(
            build_predicate(Some(&w), &x).unwrap(),
            "WHERE Codice IN ('001', '002') AND Codice NOT IN ('001')"
        );
    }

    #[test]
    fn single_set_variants() {
        let w = set(&["001"]);
        assert_eq!(
            build_predicate(Some(&w), &BTreeSet::new()).unwrap(),
            "WHERE Codice IN ('001')"
        );
        let x = set(&["003"]);
        assert_eq!(
            build_predicate(None, &x).unwrap(),
            "WHERE Codice NOT IN ('003')"
        );
    }

    #[test]
    fn neither_set_means_no_predicate() {
        assert_eq!(build_predicate(None, &BTreeSet::new()), None);
        let empty = set(&[]);
        assert_eq!(build_predicate(Some(&empty), &BTreeSet::new()), None);
    }

    #[test]
    fn codes_with_quotes_are_escaped() {
        let x = set(&["a'b"]);
        assert_eq!(
            build_predicate(None, &x).unwrap(),
            "WHERE Codice NOT IN ('a''b')"
        );
    }
}
