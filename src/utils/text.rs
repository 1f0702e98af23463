/// Collapse every run of whitespace to a single space and trim the ends.
///
/// Applied to every name-like field before it reaches either output
/// format. Idempotent: feeding the result back in returns it unchanged.
pub fn collapse_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when the value is already in collapsed form.
pub fn is_collapsed(s: &str) -> bool {
    s == collapse_spaces(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_internal_runs_and_trims() {
        assert_eq!(collapse_spaces(" A   B "), "A B");
        assert_eq!(collapse_spaces("Mario\t\tRossi"), "Mario Rossi");
        assert_eq!(collapse_spaces("  "), "");
    }

    #[test]
    fn idempotent() {
        for s in [" A   B ", "già  pulito", "", "x", " \t y \n z "] {
            let once = collapse_spaces(s);
            assert_eq!(collapse_spaces(&once), once);
        }
    }

    #[test]
    fn detects_collapsed_form() {
        assert!(is_collapsed("Mario Rossi"));
        assert!(!is_collapsed("Mario  Rossi"));
        assert!(!is_collapsed(" Mario Rossi"));
    }
}
