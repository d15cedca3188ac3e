//! The shared expansion loop behind all four strategies.

use pathgrid_core::{Dims, Grid, Pos};

use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::frontier::{FifoFrontier, Frontier, LifoFrontier, Priority, PriorityFrontier};
use crate::path::reconstruct_path;
use crate::state::{Cost, SearchState};
use crate::traits::AstarPather;

/// Output of one search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Nodes in the order they were finalized. Always starts with the
    /// source; ends with the target when it was reached.
    pub visited: Vec<Pos>,
    /// Source to target inclusive, or empty when the target is unreachable.
    pub path: Vec<Pos>,
}

impl SearchResult {
    /// Whether a path to the target was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path (0 when not found).
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Runs searches on boards and owns the per-run caches.
///
/// The search table and frontiers are reused across runs, so repeated
/// queries allocate nothing after warm-up. Every run resets the table
/// first: the outcome never depends on what the previous run left behind.
#[derive(Debug, Clone)]
pub struct Searcher {
    state: SearchState,
    fifo: FifoFrontier,
    lifo: LifoFrontier,
    heap: PriorityFrontier,
    // shared scratch buffer for neighbor queries
    nbuf: Vec<Pos>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(Dims::default())
    }
}

impl Searcher {
    /// Create a searcher with caches sized for `dims`.
    pub fn new(dims: Dims) -> Self {
        Self {
            state: SearchState::new(dims),
            fifo: FifoFrontier::default(),
            lifo: LifoFrontier::default(),
            heap: PriorityFrontier::default(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Transient data left by the last run (distances, predecessors, costs).
    #[inline]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Search from the board's start to its finish.
    pub fn search_board(
        &mut self,
        grid: &Grid,
        algorithm: Algorithm,
    ) -> Result<SearchResult, SearchError> {
        self.search(grid, algorithm, grid.start(), grid.finish())
    }

    /// Search `grid` from `source` to `target` with the given strategy.
    ///
    /// Fails fast when either endpoint is off the board or the source is a
    /// wall. A wall target simply cannot be reached.
    pub fn search(
        &mut self,
        grid: &Grid,
        algorithm: Algorithm,
        source: Pos,
        target: Pos,
    ) -> Result<SearchResult, SearchError> {
        let dims = grid.dims();
        let si = dims
            .index(source)
            .ok_or(SearchError::OutOfBounds { pos: source, dims })?;
        let ti = dims
            .index(target)
            .ok_or(SearchError::OutOfBounds { pos: target, dims })?;
        if grid.is_wall(source) {
            return Err(SearchError::SourceIsWall(source));
        }
        if self.state.dims() != dims {
            self.state.resize(dims);
        }

        let visited = match algorithm {
            Algorithm::Bfs => {
                let mut fr = std::mem::take(&mut self.fifo);
                let v = self.run(grid, &mut fr, si, ti, false);
                self.fifo = fr;
                v
            }
            Algorithm::Dfs => {
                let mut fr = std::mem::take(&mut self.lifo);
                let v = self.run(grid, &mut fr, si, ti, false);
                self.lifo = fr;
                v
            }
            Algorithm::Dijkstra => {
                let mut fr = std::mem::take(&mut self.heap);
                let v = self.run(grid, &mut fr, si, ti, false);
                self.heap = fr;
                v
            }
            Algorithm::Astar => {
                let mut fr = std::mem::take(&mut self.heap);
                let v = self.run(grid, &mut fr, si, ti, true);
                self.heap = fr;
                v
            }
        };
        let path = reconstruct_path(&self.state, source, target);

        log::debug!(
            "{algorithm}: {source} -> {target} on {dims}: {} visited, path of {} nodes",
            visited.len(),
            path.len()
        );
        Ok(SearchResult { visited, path })
    }

    /// Expand from `source` until `target` is finalized or the frontier runs
    /// dry, returning the finalization order.
    ///
    /// With `informed` set, priorities include the pather's estimate to the
    /// target (A*); otherwise the estimate is taken as 0.
    fn run<P: AstarPather, F: Frontier>(
        &mut self,
        pather: &P,
        frontier: &mut F,
        source: usize,
        target: usize,
        informed: bool,
    ) -> Vec<Pos> {
        self.state.reset();
        frontier.clear();

        let dims = self.state.dims;
        let goal = dims.pos(target);
        let estimate = |p: Pos| if informed { pather.estimate(p, goal) } else { 0 };

        let h0 = estimate(dims.pos(source));
        {
            let n = &mut self.state.nodes[source];
            n.distance = 0;
            n.cost = Cost { f: h0, g: 0, h: h0 };
        }
        frontier.push(source, Priority { f: h0, h: h0 });

        let mut visited = Vec::new();
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = frontier.pop() {
            // Skip stale entries.
            if self.state.nodes[ci].visited {
                continue;
            }
            self.state.nodes[ci].visited = true;
            let cp = dims.pos(ci);
            visited.push(cp);
            if ci == target {
                break;
            }

            let current_g = self.state.nodes[ci].distance;
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);
            if F::DEPTH_FIRST {
                nbuf.reverse();
            }

            for &np in nbuf.iter() {
                let Some(ni) = dims.index(np) else {
                    continue;
                };
                let tentative = current_g + pather.cost(cp, np);
                let n = &mut self.state.nodes[ni];
                if n.visited {
                    continue;
                }
                // Relaxation. A depth-first frontier instead lets the latest
                // push claim the node, since that entry pops first.
                if !F::DEPTH_FIRST && tentative >= n.distance {
                    continue;
                }
                let h = estimate(np);
                n.distance = tentative;
                n.previous = Some(ci);
                n.cost = Cost {
                    f: tentative + h,
                    g: tentative,
                    h,
                };
                frontier.push(ni, Priority { f: tentative + h, h });
            }
        }

        self.nbuf = nbuf;
        visited
    }
}

/// Search `grid` from `source` to `target` with a throwaway [`Searcher`].
pub fn search(
    grid: &Grid,
    algorithm: Algorithm,
    source: Pos,
    target: Pos,
) -> Result<SearchResult, SearchError> {
    Searcher::new(grid.dims()).search(grid, algorithm, source, target)
}

/// Search from the board's start to its finish with a throwaway [`Searcher`].
pub fn search_board(grid: &Grid, algorithm: Algorithm) -> Result<SearchResult, SearchError> {
    search(grid, algorithm, grid.start(), grid.finish())
}
