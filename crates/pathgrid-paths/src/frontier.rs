//! Frontier disciplines.
//!
//! A frontier holds discovered but not yet finalized nodes. Its pop order is
//! the only thing that distinguishes the four strategies: FIFO gives BFS,
//! LIFO gives DFS, and a min-heap gives Dijkstra or A* depending on the
//! priority the search loop computes.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

/// Ordering key of a frontier entry. Ignored by FIFO and LIFO frontiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Priority {
    /// Primary key: `g` for Dijkstra, `g + h` for A*.
    pub f: i32,
    /// First tie-breaker: the heuristic estimate (0 for Dijkstra).
    pub h: i32,
}

/// Container of discovered node indices with a fixed pop discipline.
pub trait Frontier {
    /// Whether this frontier pops the most recently pushed entry first.
    ///
    /// Depth-first frontiers receive successors in reverse expansion order
    /// (so the first neighbor is popped first, as in recursive DFS) and let
    /// a later push overwrite an undiscovered node's predecessor.
    const DEPTH_FIRST: bool = false;

    fn push(&mut self, idx: usize, priority: Priority);

    fn pop(&mut self) -> Option<usize>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    fn clear(&mut self);
}

// ---------------------------------------------------------------------------
// FIFO
// ---------------------------------------------------------------------------

/// Queue frontier (breadth-first).
#[derive(Debug, Default, Clone)]
pub struct FifoFrontier {
    queue: VecDeque<usize>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, idx: usize, _priority: Priority) {
        self.queue.push_back(idx);
    }

    fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}

// ---------------------------------------------------------------------------
// LIFO
// ---------------------------------------------------------------------------

/// Stack frontier (depth-first).
#[derive(Debug, Default, Clone)]
pub struct LifoFrontier {
    stack: Vec<usize>,
}

impl Frontier for LifoFrontier {
    const DEPTH_FIRST: bool = true;

    fn push(&mut self, idx: usize, _priority: Priority) {
        self.stack.push(idx);
    }

    fn pop(&mut self) -> Option<usize> {
        self.stack.pop()
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// A heap entry, ordered by `(f, h, seq)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    idx: usize,
    priority: Priority,
    /// Monotonically increasing insertion counter. Equal priorities pop in
    /// insertion order, which follows the neighbor expansion order.
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .f
            .cmp(&other.priority.f)
            .then(self.priority.h.cmp(&other.priority.h))
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap frontier (Dijkstra, A*).
///
/// Stale entries are not removed when a node is relaxed again; the search
/// loop skips nodes that are already finalized when they pop.
#[derive(Debug, Default, Clone)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<Entry>>,
    seq: u64,
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, idx: usize, priority: Priority) {
        self.heap.push(Reverse(Entry {
            idx,
            priority,
            seq: self.seq,
        }));
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse(e)| e.idx)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(f: i32, h: i32) -> Priority {
        Priority { f, h }
    }

    fn drain(fr: &mut impl Frontier) -> Vec<usize> {
        std::iter::from_fn(|| fr.pop()).collect()
    }

    #[test]
    fn fifo_pops_in_push_order() {
        let mut fr = FifoFrontier::default();
        for i in [3, 1, 2] {
            fr.push(i, p(9 - i as i32, 0));
        }
        assert_eq!(fr.len(), 3);
        assert_eq!(drain(&mut fr), vec![3, 1, 2]);
        assert!(fr.is_empty());
    }

    #[test]
    fn lifo_pops_newest_first() {
        let mut fr = LifoFrontier::default();
        for i in [3, 1, 2] {
            fr.push(i, Priority::default());
        }
        assert_eq!(drain(&mut fr), vec![2, 1, 3]);
    }

    #[test]
    fn priority_pops_lowest_f() {
        let mut fr = PriorityFrontier::default();
        fr.push(0, p(5, 0));
        fr.push(1, p(2, 0));
        fr.push(2, p(7, 0));
        assert_eq!(drain(&mut fr), vec![1, 0, 2]);
    }

    #[test]
    fn priority_ties_prefer_lower_h_then_insertion() {
        let mut fr = PriorityFrontier::default();
        fr.push(10, p(4, 3));
        fr.push(11, p(4, 1));
        fr.push(12, p(4, 3));
        fr.push(13, p(4, 1));
        assert_eq!(drain(&mut fr), vec![11, 13, 10, 12]);
    }

    #[test]
    fn clear_empties_and_restarts_sequence() {
        let mut fr = PriorityFrontier::default();
        fr.push(1, p(1, 0));
        fr.push(2, p(1, 0));
        fr.clear();
        assert!(fr.is_empty());
        fr.push(7, p(1, 0));
        fr.push(8, p(1, 0));
        assert_eq!(drain(&mut fr), vec![7, 8]);
    }
}
