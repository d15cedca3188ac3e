use std::fmt;

use pathgrid_core::{Dims, Pos};

/// Precondition violations rejected before a search starts.
///
/// An unreachable target is not an error: the search succeeds with an empty
/// path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The source or target lies outside the board.
    OutOfBounds { pos: Pos, dims: Dims },
    /// The source node is a wall.
    SourceIsWall(Pos),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, dims } => {
                write!(f, "search: position {pos} outside {dims} board")
            }
            Self::SourceIsWall(pos) => write!(f, "search: source {pos} is a wall"),
        }
    }
}

impl std::error::Error for SearchError {}
