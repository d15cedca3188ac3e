//! Shortest-path reconstruction shared by every strategy.

use pathgrid_core::Pos;

use crate::state::SearchState;

/// Walk predecessor links from `target` back to the root and return the
/// positions in travel order, `source` first and `target` last.
///
/// Returns an empty vector when `target` was never reached (it has no
/// predecessor and is not the source) or lies off the board.
pub fn reconstruct_path(state: &SearchState, source: Pos, target: Pos) -> Vec<Pos> {
    let Some(ti) = state.dims.index(target) else {
        return Vec::new();
    };
    if target == source {
        return vec![source];
    }
    if state.nodes[ti].previous.is_none() {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut cur = Some(ti);
    while let Some(ci) = cur {
        path.push(state.dims.pos(ci));
        cur = state.nodes[ci].previous;
    }
    path.reverse();
    path
}
