//! Output formatting for search outcomes.

use crate::searcher::WordMatch;

/// Printed for a word that does not occur in the grid.
pub const NOT_FOUND: &str = "NOT FOUND";

/// `(r1, c1) (r2, c2)` for a match, [`NOT_FOUND`] otherwise.
#[must_use]
pub fn format_outcome(outcome: Option<&WordMatch>) -> String {
    match outcome {
        Some(m) => m.to_string(),
        None => NOT_FOUND.to_string(),
    }
}

/// One formatted line per outcome, in the given order.
pub fn format_outcomes(outcomes: &[Option<WordMatch>]) -> Vec<String> {
    outcomes.iter().map(|o| format_outcome(o.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;

    #[test]
    fn test_format_found() {
        let m = WordMatch { start: Coordinate::new(1, 0), end: Coordinate::new(1, 2) };
        assert_eq!(format_outcome(Some(&m)), "(1, 0) (1, 2)");
    }

    #[test]
    fn test_format_not_found() {
        assert_eq!(format_outcome(None), "NOT FOUND");
    }

    #[test]
    fn test_format_outcomes_keeps_order() {
        let m = WordMatch { start: Coordinate::new(0, 0), end: Coordinate::new(0, 0) };
        assert_eq!(format_outcomes(&[None, Some(m)]), vec!["NOT FOUND", "(0, 0) (0, 0)"]);
    }
}
