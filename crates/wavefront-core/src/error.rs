//! Errors raised while building an [`OccupancyGrid`](crate::OccupancyGrid).

use crate::geom::Point;
use std::fmt;

/// The input could not be turned into a rectangular grid of known labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows with no columns.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A numeric cell label outside {0, 1, 2}.
    InvalidLabel { value: i32, pos: Point },
    /// A character with no label mapping in a text map.
    InvalidChar { ch: char, pos: Point },
    /// The grid does not fit in `i32` coordinates.
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} columns, expected {expected}"
            ),
            Self::InvalidLabel { value, pos } => {
                write!(f, "grid: invalid cell label {value} at {pos}")
            }
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid map character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::TooLarge { rows, cols } => write!(f, "grid: {rows}x{cols} is too large"),
        }
    }
}

impl std::error::Error for GridError {}
