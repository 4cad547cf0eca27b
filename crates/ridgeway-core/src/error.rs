use std::fmt;

use crate::geom::Point;

/// Errors raised while building or addressing a height grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one cell.
    Empty,
    /// A row's length differs from the number of rows.
    NotSquare { row: usize, expected: usize, got: usize },
    /// A height outside `[MIN_HEIGHT, MAX_HEIGHT]`.
    HeightOutOfRange { pos: Point, value: i32 },
    /// A point outside the grid.
    OutOfBounds { pos: Point, size: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "height grid must contain at least one cell"),
            Self::NotSquare { row, expected, got } => {
                write!(f, "height grid row {row} has {got} cells, expected {expected}")
            }
            Self::HeightOutOfRange { pos, value } => {
                write!(f, "height {value} at {pos} is outside [0, 99]")
            }
            Self::OutOfBounds { pos, size } => {
                write!(f, "{pos} lies outside the {size}x{size} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}
