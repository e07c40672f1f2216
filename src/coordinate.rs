use std::fmt;

/// A `(row, col)` position in a [`Grid`](crate::grid::Grid), both 0-based.
///
/// Plain value type: copied freely, compared field-wise. "No position" is
/// expressed as `Option<Coordinate>` rather than a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Formats as `(row, col)`, the same shape used in solver output.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
