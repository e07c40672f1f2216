//! First-match word search over a [`Grid`].
//!
//! # Algorithm
//!
//! 1. Without wrap, a word longer than both grid dimensions cannot fit, so it
//!    is rejected before looking at any letters.
//! 2. The [`PositionIndex`] supplies every occurrence of the word's first
//!    letter, in row-major order.
//! 3. From each occurrence (the *anchor*), each neighbour is tried in
//!    [`Direction::ALL`] order. The direction from the anchor to that
//!    neighbour is locked in and the rest of the word is walked one letter
//!    per step.
//! 4. With wrap, reaching the anchor again ends the attempt: the path has
//!    looped and would start reusing letters.
//! 5. The first attempt that consumes the whole word wins.
//!
//! The fixed enumeration order makes results deterministic.
//!
//! # Example
//!
//! ```
//! use wordsearch::coordinate::Coordinate;
//! use wordsearch::grid::{Grid, WrapMode};
//! use wordsearch::searcher::Searcher;
//!
//! let grid = Grid::from_rows(&["CAT", "DOG", "ARC"], WrapMode::NoWrap)?;
//! let searcher = Searcher::new(grid);
//!
//! let found = searcher.find_word("CAT").unwrap();
//! assert_eq!(found.start, Coordinate::new(0, 0));
//! assert_eq!(found.end, Coordinate::new(0, 2));
//! assert!(searcher.find_word("COW").is_none());
//! # Ok::<(), Box<wordsearch::errors::PuzzleError>>(())
//! ```

use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::grid::Grid;
use crate::position_index::PositionIndex;
use log::{debug, trace};
use std::fmt;

/// Start and end of a located word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordMatch {
    pub start: Coordinate,
    pub end: Coordinate,
}

/// Formats as `(r1, c1) (r2, c2)`.
impl fmt::Display for WordMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.end)
    }
}

/// One (anchor, direction) attempt. Lives only for the duration of that attempt.
#[derive(Debug)]
struct SearchState<'w> {
    /// Position of the word's first letter.
    anchor: Coordinate,
    current: Coordinate,
    direction: Direction,
    /// Letters not yet matched; `remaining[0]` is expected at `current`.
    remaining: &'w [char],
}

impl SearchState<'_> {
    /// Walk in the locked direction until the word is consumed (returning
    /// the last letter's position) or the attempt fails.
    fn run(mut self, grid: &Grid) -> Option<Coordinate> {
        loop {
            if grid.wraps() && self.current == self.anchor {
                trace!("{} from {}: looped back to anchor", self.direction, self.anchor);
                return None;
            }

            let (&expected, rest) = self.remaining.split_first()?;
            if grid.letter_at(self.current)? != expected {
                return None;
            }
            if rest.is_empty() {
                return Some(self.current);
            }

            self.current = grid.step(self.current, self.direction)?;
            self.remaining = rest;
        }
    }
}

/// A grid plus its position index, ready to answer word queries.
///
/// Nothing is mutated after construction, so one searcher can serve any
/// number of queries (including from several threads).
#[derive(Debug, Clone)]
pub struct Searcher {
    grid: Grid,
    index: PositionIndex,
}

impl Searcher {
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let index = PositionIndex::build(&grid);
        debug!(
            "indexed {} x {} grid ({}) with {} distinct letters",
            grid.rows(),
            grid.cols(),
            grid.wrap_mode(),
            index.len()
        );
        Self { grid, index }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn index(&self) -> &PositionIndex {
        &self.index
    }

    /// Find the first occurrence of `word`, or `None` if it does not appear.
    ///
    /// Letters are compared exactly, so case matters. An empty word is
    /// never found. Neither is a one-letter word: a match needs at least
    /// one step away from its first letter.
    #[must_use]
    pub fn find_word(&self, word: &str) -> Option<WordMatch> {
        let letters: Vec<char> = word.chars().collect();
        let (&first, rest) = letters.split_first()?;

        if !self.grid.wraps() && letters.len() > self.grid.rows().max(self.grid.cols()) {
            debug!("{word}: longer than any line in the grid");
            return None;
        }

        let candidates = self.index.positions_of(first);
        if candidates.is_empty() {
            debug!("{word}: '{first}' does not occur in the grid");
            return None;
        }

        for &anchor in candidates {
            for next in self.grid.neighbours(anchor).into_iter().flatten() {
                // `None` only when the step returned to the anchor itself
                let Some(direction) = self.grid.relation_of(anchor, next) else {
                    continue;
                };
                let state = SearchState { anchor, current: next, direction, remaining: rest };
                if let Some(end) = state.run(&self.grid) {
                    debug!("{word}: found {direction} from {anchor} to {end}");
                    return Some(WordMatch { start: anchor, end });
                }
            }
        }

        debug!("{word}: tried {} starting positions, no match", candidates.len());
        None
    }

    /// Search every word, returning outcomes in the same order.
    pub fn find_all<S: AsRef<str>>(&self, words: &[S]) -> Vec<Option<WordMatch>> {
        words.iter().map(|w| self.find_word(w.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::WrapMode;

    fn searcher(rows: &[&str], wrap: WrapMode) -> Searcher {
        Searcher::new(Grid::from_rows(rows, wrap).unwrap())
    }

    fn found(start: (usize, usize), end: (usize, usize)) -> Option<WordMatch> {
        Some(WordMatch { start: start.into(), end: end.into() })
    }

    #[test]
    fn test_no_straight_path() {
        let s = searcher(&["ABC", "DEF", "GHI"], WrapMode::NoWrap);
        assert_eq!(s.find_word("ABEI"), None);
    }

    #[test]
    fn test_horizontal_right() {
        let s = searcher(&["CAT", "DOG", "ARC"], WrapMode::NoWrap);
        assert_eq!(s.find_word("CAT"), found((0, 0), (0, 2)));
    }

    #[test]
    fn test_all_eight_directions() {
        let s = searcher(&["ABC", "DEF", "GHI"], WrapMode::NoWrap);
        assert_eq!(s.find_word("EA"), found((1, 1), (0, 0)));
        assert_eq!(s.find_word("EB"), found((1, 1), (0, 1)));
        assert_eq!(s.find_word("EC"), found((1, 1), (0, 2)));
        assert_eq!(s.find_word("ED"), found((1, 1), (1, 0)));
        assert_eq!(s.find_word("EF"), found((1, 1), (1, 2)));
        assert_eq!(s.find_word("EG"), found((1, 1), (2, 0)));
        assert_eq!(s.find_word("EH"), found((1, 1), (2, 1)));
        assert_eq!(s.find_word("EI"), found((1, 1), (2, 2)));
        assert_eq!(s.find_word("IEA"), found((2, 2), (0, 0)));
        assert_eq!(s.find_word("GEC"), found((2, 0), (0, 2)));
    }

    #[test]
    fn test_first_candidate_wins() {
        // "AB" occurs rightward from (0,0) and again from (1,1)
        let s = searcher(&["ABX", "XAB"], WrapMode::NoWrap);
        assert_eq!(s.find_word("AB"), found((0, 0), (0, 1)));
    }

    #[test]
    fn test_direction_order_breaks_ties() {
        // From the centre 'A', both top ("AB" upward) and bottom reach a 'B';
        // top comes first in enumeration order.
        let s = searcher(&["XBX", "XAX", "XBX"], WrapMode::NoWrap);
        assert_eq!(s.find_word("AB"), found((1, 1), (0, 1)));
    }

    #[test]
    fn test_later_candidate_when_first_fails() {
        let s = searcher(&["AXX", "XXX", "XAB"], WrapMode::NoWrap);
        assert_eq!(s.find_word("AB"), found((2, 1), (2, 2)));
    }

    #[test]
    fn test_too_long_without_wrap() {
        let s = searcher(&["AAA", "AAA"], WrapMode::NoWrap);
        assert_eq!(s.find_word("AAAA"), None);
        assert_eq!(s.find_word("AAA"), found((0, 0), (0, 2)));
    }

    #[test]
    fn test_missing_first_letter() {
        let s = searcher(&["CAT", "DOG"], WrapMode::Wrap);
        assert!(s.index().positions_of('Z').is_empty());
        assert_eq!(s.find_word("ZOO"), None);
    }

    #[test]
    fn test_case_sensitive() {
        let s = searcher(&["cat"], WrapMode::NoWrap);
        assert_eq!(s.find_word("CAT"), None);
        assert_eq!(s.find_word("cat"), found((0, 0), (0, 2)));
    }

    #[test]
    fn test_wrap_horizontal() {
        let s = searcher(&["TCA", "XXX", "XXX"], WrapMode::Wrap);
        assert_eq!(s.find_word("CAT"), found((0, 1), (0, 0)));

        let no_wrap = searcher(&["TCA", "XXX", "XXX"], WrapMode::NoWrap);
        assert_eq!(no_wrap.find_word("CAT"), None);
    }

    #[test]
    fn test_wrap_vertical_and_diagonal() {
        let s = searcher(&["OXX", "XXX", "DXX"], WrapMode::Wrap);
        // bottom from (2,0) wraps to (0,0)
        assert_eq!(s.find_word("DO"), found((2, 0), (0, 0)));

        let diag = searcher(&["XXX", "XXX", "XXA"], WrapMode::Wrap);
        // topleft is tried before any wrapped neighbour
        assert_eq!(diag.find_word("AX"), found((2, 2), (1, 1)));
    }

    #[test]
    fn test_wrap_cannot_reuse_anchor() {
        // Going right from 'A' wraps back onto 'A' after three letters
        let s = searcher(&["ABC"], WrapMode::Wrap);
        assert_eq!(s.find_word("ABC"), found((0, 0), (0, 2)));
        assert_eq!(s.find_word("ABCA"), None);
        assert_eq!(s.find_word("CAB"), found((0, 2), (0, 1)));
    }

    #[test]
    fn test_single_cell_wrap_guard() {
        let s = searcher(&["A"], WrapMode::Wrap);
        assert_eq!(s.find_word("AA"), None);
        assert_eq!(s.find_word("AAA"), None);
    }

    #[test]
    fn test_single_letter_word_not_found() {
        let s = searcher(&["XA", "AX"], WrapMode::NoWrap);
        assert_eq!(s.find_word("A"), None);
        assert_eq!(s.find_word("Q"), None);

        let w = searcher(&["XA", "AX"], WrapMode::Wrap);
        assert_eq!(w.find_word("A"), None);
        assert_eq!(w.find_word("AX"), found((0, 1), (1, 1)));
    }

    #[test]
    fn test_empty_word_not_found() {
        let s = searcher(&["A"], WrapMode::NoWrap);
        assert_eq!(s.find_word(""), None);
    }

    #[test]
    fn test_two_by_two_wrap() {
        let s = searcher(&["AB", "CD"], WrapMode::Wrap);
        // every direction from (0,0) returns to (0,0) after two steps
        assert_eq!(s.find_word("ADCB"), None);
        assert_eq!(s.find_word("AD"), found((0, 0), (1, 1)));
        assert_eq!(s.find_word("ABA"), None);
        assert_eq!(s.find_word("BA"), found((0, 1), (0, 0)));
    }

    #[test]
    fn test_find_all_keeps_query_order() {
        let s = searcher(&["CAT", "DOG", "ARC"], WrapMode::NoWrap);
        let results = s.find_all(&["DOG", "NOPE", "CAT"]);
        assert_eq!(results, vec![found((1, 0), (1, 2)), None, found((0, 0), (0, 2))]);
    }

    #[test]
    fn test_display() {
        let m = WordMatch { start: Coordinate::new(0, 0), end: Coordinate::new(2, 2) };
        assert_eq!(m.to_string(), "(0, 0) (2, 2)");
    }
}
