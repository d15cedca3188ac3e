//! Search strategies for grid pathfinding boards.
//!
//! Four strategies compare how a search explores a board:
//!
//! - **BFS**: FIFO frontier, minimum-edge path ([`Algorithm::Bfs`])
//! - **DFS**: LIFO frontier, any path ([`Algorithm::Dfs`])
//! - **Dijkstra**: frontier keyed by distance ([`Algorithm::Dijkstra`])
//! - **A\***: frontier keyed by `g + h`, Manhattan heuristic ([`Algorithm::Astar`])
//!
//! All of them run through one expansion loop in [`Searcher`], differing
//! only in their [`Frontier`]. A run returns the order in which nodes were
//! finalized and the reconstructed path ([`SearchResult`]).
//!
//! Transient search data lives in a [`SearchState`] owned by the searcher,
//! never on the [`Grid`](pathgrid_core::Grid), so one board can be searched
//! from several threads at once, each with its own `Searcher`.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | edge costs (relaxation) |
//! | [`AstarPather`] : [`WeightedPather`] | admissible heuristic |

mod algorithm;
mod distance;
mod error;
mod frontier;
mod path;
mod searcher;
mod state;
mod traits;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use distance::manhattan;
pub use error::SearchError;
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, Priority, PriorityFrontier};
pub use path::reconstruct_path;
pub use searcher::{SearchResult, Searcher, search, search_board};
pub use state::{Cost, NodeState, SearchState, UNREACHABLE};
pub use traits::{AstarPather, Pather, WeightedPather};
