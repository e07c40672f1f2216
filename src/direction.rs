//! The eight compass directions a word can run in.
//!
//! Rows grow downward and columns grow rightward, so "top" is `Δrow = -1` and
//! "left" is `Δcol = -1`.

use std::fmt;

/// Vertical component of a [`Direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Vertical {
    Top,
    Bottom,
}

/// Horizontal component of a [`Direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Horizontal {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Direction {
    /// Every direction, in the order the searcher tries them.
    pub const ALL: [Direction; 8] = [
        Direction::TopLeft,
        Direction::Top,
        Direction::TopRight,
        Direction::Left,
        Direction::Right,
        Direction::BottomLeft,
        Direction::Bottom,
        Direction::BottomRight,
    ];

    /// `(Δrow, Δcol)` for one step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::TopLeft => (-1, -1),
            Direction::Top => (-1, 0),
            Direction::TopRight => (-1, 1),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::BottomLeft => (1, -1),
            Direction::Bottom => (1, 0),
            Direction::BottomRight => (1, 1),
        }
    }

    /// Combine per-axis components; `None` when neither axis moves.
    pub(crate) fn from_parts(vertical: Option<Vertical>, horizontal: Option<Horizontal>) -> Option<Direction> {
        use Horizontal::{Left, Right};
        use Vertical::{Bottom, Top};

        match (vertical, horizontal) {
            (Some(Top), Some(Left)) => Some(Direction::TopLeft),
            (Some(Top), None) => Some(Direction::Top),
            (Some(Top), Some(Right)) => Some(Direction::TopRight),
            (None, Some(Left)) => Some(Direction::Left),
            (None, Some(Right)) => Some(Direction::Right),
            (Some(Bottom), Some(Left)) => Some(Direction::BottomLeft),
            (Some(Bottom), None) => Some(Direction::Bottom),
            (Some(Bottom), Some(Right)) => Some(Direction::BottomRight),
            (None, None) => None,
        }
    }

    /// Symbolic name (`"topleft"`, `"bottom"`, ...).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Direction::TopLeft => "topleft",
            Direction::Top => "top",
            Direction::TopRight => "topright",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::BottomLeft => "bottomleft",
            Direction::Bottom => "bottom",
            Direction::BottomRight => "bottomright",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
