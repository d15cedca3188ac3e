//! **pathgrid-core**: board model for grid pathfinding.
//!
//! This crate provides the foundational types shared by the search and maze
//! crates: geometry primitives, the [`Node`] entity and the [`Grid`] arena
//! that owns a board's nodes.

pub mod error;
pub mod geom;
pub mod grid;
pub mod node;

pub use error::GridError;
pub use geom::{Dims, Pos};
pub use grid::Grid;
pub use node::Node;
