//! Letter → positions index used to seed word searches.
//!
//! Instead of scanning the whole grid for every query, the searcher looks up
//! the query's first letter here and starts only from its known occurrences.

use crate::coordinate::Coordinate;
use crate::grid::Grid;
use std::collections::HashMap;

/// Maps each letter to every coordinate where it occurs, in row-major order.
///
/// Built once from a [`Grid`] and read-only afterward. The lists together
/// cover every grid cell exactly once.
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    positions: HashMap<char, Vec<Coordinate>>,
}

impl PositionIndex {
    /// One row-major pass over `grid`, appending each cell to its letter's list.
    #[must_use]
    pub fn build(grid: &Grid) -> Self {
        let mut positions: HashMap<char, Vec<Coordinate>> = HashMap::new();
        for (coord, letter) in grid.cells() {
            positions.entry(letter).or_default().push(coord);
        }
        Self { positions }
    }

    /// Every position of `letter`; empty if the letter is absent.
    #[must_use]
    pub fn positions_of(&self, letter: char) -> &[Coordinate] {
        self.positions.get(&letter).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct letters present in the grid (unordered).
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.positions.keys().copied()
    }

    /// Number of distinct letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
