//! Maze generation for pathfinding boards.

pub mod error;
pub mod mazegen;

pub use error::MazeError;
pub use mazegen::{FourDirectionWalker, MazeConfig, MazeGen, MazeStyle, RandomWalker};
