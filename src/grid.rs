//! The letter grid, its bounds, and single-step movement with optional wraparound.
//!
//! A [`Grid`] is built once (usually through [`GridBuilder`] while reading a
//! puzzle) and is read-only afterward. Movement is expressed as
//! [`Grid::step`], which honors the grid's [`WrapMode`]:
//!
//! - **`NoWrap`**: stepping off an edge yields `None`.
//! - **`Wrap`**: edges connect to their opposite edges (torus topology), so a
//!   step always lands on a cell.

use crate::coordinate::Coordinate;
use crate::direction::{Direction, Horizontal, Vertical};
use crate::errors::PuzzleError;
use std::fmt;
use std::str::FromStr;

/// Whether words may run off one edge and continue from the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    Wrap,
    #[default]
    NoWrap,
}

impl WrapMode {
    /// The literal token used for this mode in puzzle files.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            WrapMode::Wrap => "WRAP",
            WrapMode::NoWrap => "NO_WRAP",
        }
    }
}

/// Parses `WRAP` / `NO_WRAP`, ignoring case and surrounding whitespace.
impl FromStr for WrapMode {
    type Err = Box<PuzzleError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case(WrapMode::Wrap.token()) {
            Ok(WrapMode::Wrap)
        } else if token.eq_ignore_ascii_case(WrapMode::NoWrap.token()) {
            Ok(WrapMode::NoWrap)
        } else {
            Err(Box::new(PuzzleError::InvalidWrapToken { token: token.to_string() }))
        }
    }
}

impl fmt::Display for WrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A `rows x cols` array of ASCII letters plus its wrap mode.
///
/// Invariants (enforced by [`GridBuilder`]): both dimensions are at least 1,
/// every row holds exactly `cols` letters, and letters keep their case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    wrap: WrapMode,
    /// Row-major letters, `rows * cols` long.
    cells: Vec<char>,
}

impl Grid {
    /// Build a grid from complete rows; the column count comes from the first row.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGridSize` for an empty row list, otherwise whatever
    /// [`GridBuilder::push_row`] reports for a malformed row.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], wrap: WrapMode) -> Result<Self, Box<PuzzleError>> {
        let cols = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut builder = GridBuilder::new(rows.len(), cols)?;
        for row in rows {
            builder.push_row(row.as_ref())?;
        }
        builder.finish(wrap)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap
    }

    #[must_use]
    pub fn wraps(&self) -> bool {
        self.wrap == WrapMode::Wrap
    }

    /// True iff `coord` lies inside `[0, rows) x [0, cols)`.
    #[must_use]
    pub fn is_valid(&self, coord: Coordinate) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// The letter at `coord`, or `None` if `coord` is out of bounds.
    #[must_use]
    pub fn letter_at(&self, coord: Coordinate) -> Option<char> {
        if self.is_valid(coord) {
            self.cells.get(coord.row * self.cols + coord.col).copied()
        } else {
            None
        }
    }

    /// Every cell with its coordinate, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, char)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Coordinate::new(i / cols, i % cols), c))
    }

    /// The coordinate one step from `coord` in `direction`.
    ///
    /// Without wrap, `None` means the step left the grid. With wrap the
    /// result is always `Some`.
    #[must_use]
    pub fn step(&self, coord: Coordinate, direction: Direction) -> Option<Coordinate> {
        let (dr, dc) = direction.delta();
        match self.wrap {
            WrapMode::NoWrap => {
                let row = coord.row.checked_add_signed(dr).filter(|&r| r < self.rows)?;
                let col = coord.col.checked_add_signed(dc).filter(|&c| c < self.cols)?;
                Some(Coordinate::new(row, col))
            }
            WrapMode::Wrap => Some(Coordinate::new(
                wrap_axis(coord.row, dr, self.rows),
                wrap_axis(coord.col, dc, self.cols),
            )),
        }
    }

    /// The neighbours of `coord`, one slot per direction in [`Direction::ALL`] order.
    #[must_use]
    pub fn neighbours(&self, coord: Coordinate) -> [Option<Coordinate>; 8] {
        Direction::ALL.map(|d| self.step(coord, d))
    }

    /// Which direction leads from `from` to the adjacent (possibly
    /// wrap-adjacent) cell `to`.
    ///
    /// Each axis is read independently: a difference of exactly one cell, or
    /// a jump between the last and first index when that axis has more than
    /// one cell. Returns `None` when neither axis moved.
    ///
    /// On an axis of length 2 both directions reach the same cell, so the
    /// answer may name the opposite direction to the one that was stepped.
    /// Stepping with either one produces the same path.
    #[must_use]
    pub fn relation_of(&self, from: Coordinate, to: Coordinate) -> Option<Direction> {
        let vertical = axis_relation(from.row, to.row, self.rows).map(|toward_end| {
            if toward_end { Vertical::Bottom } else { Vertical::Top }
        });
        let horizontal = axis_relation(from.col, to.col, self.cols).map(|toward_end| {
            if toward_end { Horizontal::Right } else { Horizontal::Left }
        });
        Direction::from_parts(vertical, horizontal)
    }
}

/// Renders the grid as its rows, one per line.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}

/// One modular step along an axis of length `len`.
fn wrap_axis(val: usize, delta: isize, len: usize) -> usize {
    match delta {
        -1 if val == 0 => len - 1,
        -1 => val - 1,
        1 if val + 1 >= len => 0,
        1 => val + 1,
        _ => val,
    }
}

/// `Some(true)` for a move toward higher indices, `Some(false)` toward lower, `None` for none.
fn axis_relation(from: usize, to: usize, len: usize) -> Option<bool> {
    if to == from + 1 {
        Some(true)
    } else if from == to + 1 {
        Some(false)
    } else if len > 1 && from == len - 1 && to == 0 {
        Some(true)
    } else if len > 1 && from == 0 && to == len - 1 {
        Some(false)
    } else {
        None
    }
}

/// Accumulates validated rows for a grid of declared size.
///
/// ```
/// use wordsearch::grid::{GridBuilder, WrapMode};
///
/// let mut builder = GridBuilder::new(2, 3)?;
/// builder.push_row("CAT")?;
/// builder.push_row("DOG")?;
/// let grid = builder.finish(WrapMode::NoWrap)?;
/// assert_eq!(grid.rows(), 2);
/// # Ok::<(), Box<wordsearch::errors::PuzzleError>>(())
/// ```
#[derive(Debug)]
pub struct GridBuilder {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
    rows_pushed: usize,
}

impl GridBuilder {
    /// # Errors
    ///
    /// Returns `InvalidGridSize` if either dimension is 0.
    pub fn new(rows: usize, cols: usize) -> Result<Self, Box<PuzzleError>> {
        if rows == 0 || cols == 0 {
            return Err(Box::new(PuzzleError::InvalidGridSize {
                rows: i64::try_from(rows).unwrap_or(i64::MAX),
                cols: i64::try_from(cols).unwrap_or(i64::MAX),
            }));
        }
        Ok(Self {
            rows,
            cols,
            cells: Vec::new(),
            rows_pushed: 0,
        })
    }

    /// Validate and append the next row.
    ///
    /// # Errors
    ///
    /// `TooManyRows`, `BlankGridRow`, `GridRowWrongLength`, or `NonLetterInGrid`.
    pub fn push_row(&mut self, line: &str) -> Result<(), Box<PuzzleError>> {
        let row = self.rows_pushed;
        if row == self.rows {
            return Err(Box::new(PuzzleError::TooManyRows { rows: self.rows }));
        }
        if line.is_empty() {
            return Err(Box::new(PuzzleError::BlankGridRow { row }));
        }
        let found = line.chars().count();
        if found != self.cols {
            return Err(Box::new(PuzzleError::GridRowWrongLength {
                row,
                rows: self.rows,
                expected: self.cols,
                found,
            }));
        }
        if let Some(invalid_char) = line.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(Box::new(PuzzleError::NonLetterInGrid { row, invalid_char }));
        }

        self.cells.extend(line.chars());
        self.rows_pushed += 1;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `UnexpectedEnd` if fewer rows were pushed than declared.
    pub fn finish(self, wrap: WrapMode) -> Result<Grid, Box<PuzzleError>> {
        if self.rows_pushed < self.rows {
            return Err(Box::new(PuzzleError::UnexpectedEnd { expected: "grid row" }));
        }
        Ok(Grid {
            rows: self.rows,
            cols: self.cols,
            wrap,
            cells: self.cells,
        })
    }
}
