use std::fmt;

use crate::geom::{Dims, Pos};

/// Errors raised when building or editing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The board has zero rows or zero columns.
    EmptyBoard(Dims),
    /// A position lies outside the board.
    OutOfBounds { pos: Pos, dims: Dims },
    /// The start or finish node cannot become a wall, and an endpoint
    /// cannot be moved onto a wall.
    WallOnEndpoint(Pos),
    /// Text board lines have inconsistent widths.
    InconsistentSize(String),
    /// A character outside `S`, `F`, `#`, `.` was found in a text board.
    InvalidChar { ch: char, pos: Pos },
    /// A text board lacks its `S` or `F` marker, or has more than one.
    Endpoint { marker: char, count: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoard(dims) => write!(f, "grid: empty board {dims}"),
            Self::OutOfBounds { pos, dims } => {
                write!(f, "grid: position {pos} outside {dims} board")
            }
            Self::WallOnEndpoint(pos) => {
                write!(f, "grid: wall and endpoint cannot share {pos}")
            }
            Self::InconsistentSize(s) => write!(f, "grid: inconsistent size:\n{s}"),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::Endpoint { marker, count } => {
                write!(f, "grid: expected exactly one \u{201c}{marker}\u{201d}, found {count}")
            }
        }
    }
}

impl std::error::Error for GridError {}
