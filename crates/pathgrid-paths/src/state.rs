use pathgrid_core::{Dims, Pos};

/// Sentinel value meaning "unreachable" (positive infinity) in distance and
/// cost fields.
pub const UNREACHABLE: i32 = i32::MAX;

/// A* score triple: `g` cost from source, `h` heuristic estimate to target
/// and `f = g + h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost {
    pub f: i32,
    pub g: i32,
    pub h: i32,
}

impl Cost {
    /// All three scores at [`UNREACHABLE`].
    pub const INFINITE: Self = Self {
        f: UNREACHABLE,
        g: UNREACHABLE,
        h: UNREACHABLE,
    };
}

impl Default for Cost {
    fn default() -> Self {
        Self::INFINITE
    }
}

// ---------------------------------------------------------------------------
// Per-node transient search data
// ---------------------------------------------------------------------------

/// Transient search data for one board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeState {
    pub visited: bool,
    /// Arena index of the predecessor on the discovery tree.
    pub previous: Option<usize>,
    pub distance: i32,
    pub cost: Cost,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            visited: false,
            previous: None,
            distance: UNREACHABLE,
            cost: Cost::INFINITE,
        }
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Per-run search table, keyed by row-major arena index.
///
/// Kept apart from the [`Grid`](pathgrid_core::Grid) so that searches never
/// mutate the board. Every search run resets this table before expanding.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub(crate) dims: Dims,
    pub(crate) nodes: Vec<NodeState>,
}

impl SearchState {
    /// Create a clean table for a board of the given size.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            nodes: vec![NodeState::default(); dims.len()],
        }
    }

    /// Restore every entry to its default: not visited, no predecessor,
    /// infinite distance and cost. Calling it twice is the same as once.
    pub fn reset(&mut self) {
        for n in self.nodes.iter_mut() {
            *n = NodeState::default();
        }
    }

    /// Resize for a new board. Existing capacity is reused.
    pub fn resize(&mut self, dims: Dims) {
        self.dims = dims;
        self.nodes.clear();
        self.nodes.resize(dims.len(), NodeState::default());
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Transient data of `p`, or `None` when off the board.
    #[inline]
    pub fn get(&self, p: Pos) -> Option<&NodeState> {
        self.dims.index(p).map(|i| &self.nodes[i])
    }

    /// Whether `p` was finalized by the last run.
    pub fn is_visited(&self, p: Pos) -> bool {
        self.get(p).is_some_and(|n| n.visited)
    }

    /// Distance of `p` from the source, or [`UNREACHABLE`].
    pub fn distance(&self, p: Pos) -> i32 {
        self.get(p).map_or(UNREACHABLE, |n| n.distance)
    }

    /// Score triple of `p`.
    pub fn cost(&self, p: Pos) -> Cost {
        self.get(p).map_or(Cost::INFINITE, |n| n.cost)
    }

    /// Position of the predecessor of `p` on the discovery tree.
    pub fn previous(&self, p: Pos) -> Option<Pos> {
        self.get(p)
            .and_then(|n| n.previous)
            .map(|i| self.dims.pos(i))
    }

    /// Whether every entry holds its default value.
    pub fn is_clean(&self) -> bool {
        self.nodes.iter().all(|n| *n == NodeState::default())
    }
}
