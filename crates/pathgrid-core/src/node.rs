//! The [`Node`] type: one cell of a pathfinding board.

use crate::geom::Pos;

/// A board cell.
///
/// Only the durable fields live here: identity, endpoint flags and the
/// obstacle flag. Transient per-search data (visited flag, parent link,
/// distances) is kept by the searcher in a separate table, so a [`Grid`]
/// is never left with stale search state.
///
/// [`Grid`]: crate::Grid
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pos: Pos,
    pub(crate) is_start: bool,
    pub(crate) is_finish: bool,
    pub(crate) is_wall: bool,
}

impl Node {
    /// A plain, passable node at `pos`.
    #[inline]
    pub const fn new(pos: Pos) -> Self {
        Self {
            pos,
            is_start: false,
            is_finish: false,
            is_wall: false,
        }
    }

    #[inline]
    pub const fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub const fn is_start(&self) -> bool {
        self.is_start
    }

    #[inline]
    pub const fn is_finish(&self) -> bool {
        self.is_finish
    }

    #[inline]
    pub const fn is_wall(&self) -> bool {
        self.is_wall
    }

    /// Whether the node is either endpoint.
    #[inline]
    pub const fn is_endpoint(&self) -> bool {
        self.is_start || self.is_finish
    }

    /// ASCII glyph used by the board's text form.
    pub const fn glyph(&self) -> char {
        if self.is_start {
            'S'
        } else if self.is_finish {
            'F'
        } else if self.is_wall {
            '#'
        } else {
            '.'
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_plain() {
        let n = Node::new(Pos::new(3, 4));
        assert_eq!(n.row(), 3);
        assert_eq!(n.col(), 4);
        assert!(!n.is_start());
        assert!(!n.is_finish());
        assert!(!n.is_wall());
        assert_eq!(n.glyph(), '.');
    }

    #[test]
    fn glyph_prefers_endpoints() {
        let mut n = Node::new(Pos::ZERO);
        n.is_wall = true;
        assert_eq!(n.glyph(), '#');
        n.is_start = true;
        assert_eq!(n.glyph(), 'S');
    }
}
