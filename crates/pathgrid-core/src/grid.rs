//! The [`Grid`] type: a rectangular arena of [`Node`]s.
//!
//! A `Grid` exclusively owns its nodes, stored row-major in one `Vec` and
//! addressed by [`Pos`]. Cloning yields a fully independent board.
//!
//! The grid only carries durable state (walls and the two endpoints), which
//! makes `&Grid` safe to share between concurrent searches.

use std::fmt;
use std::ops::Index;

use crate::error::GridError;
use crate::geom::{Dims, Pos};
use crate::node::Node;

/// A pathfinding board: `rows x cols` nodes with one start and one finish.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dims: Dims,
    nodes: Vec<Node>,
    start: Pos,
    finish: Pos,
}

impl Grid {
    /// Create a wall-free board with the start at `source` and the finish
    /// at `target`. Both may be the same position.
    pub fn new(rows: i32, cols: i32, source: Pos, target: Pos) -> Result<Self, GridError> {
        let dims = Dims::new(rows, cols);
        if dims.is_empty() {
            return Err(GridError::EmptyBoard(dims));
        }
        for p in [source, target] {
            if !dims.contains(p) {
                return Err(GridError::OutOfBounds { pos: p, dims });
            }
        }

        let mut nodes: Vec<Node> = dims.iter().map(Node::new).collect();
        // Indices are valid: both endpoints were bounds-checked above.
        let si = source.row as usize * dims.cols() as usize + source.col as usize;
        let ti = target.row as usize * dims.cols() as usize + target.col as usize;
        nodes[si].is_start = true;
        nodes[ti].is_finish = true;

        Ok(Self {
            dims,
            nodes,
            start: source,
            finish: target,
        })
    }

    /// Parse a text board.
    ///
    /// Each line is one row: `S` start, `F` finish, `#` wall, `.` free.
    /// Leading and trailing blank lines are ignored.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .trim_matches('\n')
            .lines()
            .map(str::trim_end)
            .collect();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        if lines.iter().any(|l| l.chars().count() != cols) {
            return Err(GridError::InconsistentSize(s.to_string()));
        }
        let dims = Dims::new(lines.len() as i32, cols as i32);
        if dims.is_empty() {
            return Err(GridError::EmptyBoard(dims));
        }

        let mut starts = Vec::new();
        let mut finishes = Vec::new();
        let mut walls = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let pos = Pos::new(row as i32, col as i32);
                match ch {
                    'S' => starts.push(pos),
                    'F' => finishes.push(pos),
                    '#' => walls.push(pos),
                    '.' => {}
                    _ => return Err(GridError::InvalidChar { ch, pos }),
                }
            }
        }
        if starts.len() != 1 {
            return Err(GridError::Endpoint {
                marker: 'S',
                count: starts.len(),
            });
        }
        if finishes.len() != 1 {
            return Err(GridError::Endpoint {
                marker: 'F',
                count: finishes.len(),
            });
        }

        let mut grid = Self::new(dims.rows(), dims.cols(), starts[0], finishes[0])?;
        for p in walls {
            grid.set_wall(p, true)?;
        }
        Ok(grid)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols()
    }

    /// Position of the start node.
    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    /// Position of the finish node.
    #[inline]
    pub fn finish(&self) -> Pos {
        self.finish
    }

    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.dims.contains(p)
    }

    /// The node at `p`, or `None` when off the board.
    #[inline]
    pub fn node(&self, p: Pos) -> Option<&Node> {
        self.dims.index(p).map(|i| &self.nodes[i])
    }

    /// Whether `p` is an obstacle. Off-board positions are not walls.
    #[inline]
    pub fn is_wall(&self, p: Pos) -> bool {
        self.node(p).is_some_and(Node::is_wall)
    }

    /// Whether `p` is on the board and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Pos) -> bool {
        self.node(p).is_some_and(|n| !n.is_wall())
    }

    /// All nodes in row-major order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterate over nodes in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Number of wall nodes.
    pub fn wall_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_wall()).count()
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    fn index_of(&self, p: Pos) -> Result<usize, GridError> {
        self.dims.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            dims: self.dims,
        })
    }

    /// Set or clear the wall flag at `p`.
    ///
    /// Walls can never be placed on the start or finish node.
    pub fn set_wall(&mut self, p: Pos, wall: bool) -> Result<(), GridError> {
        let i = self.index_of(p)?;
        let node = &mut self.nodes[i];
        if wall && node.is_endpoint() {
            return Err(GridError::WallOnEndpoint(p));
        }
        node.is_wall = wall;
        Ok(())
    }

    /// Flip the wall flag at `p` and return the new value.
    pub fn toggle_wall(&mut self, p: Pos) -> Result<bool, GridError> {
        let wall = !self.is_wall(p);
        self.set_wall(p, wall)?;
        Ok(wall)
    }

    /// Move the start marker to `p`.
    ///
    /// The old flag is cleared and the new one set in a single call, so the
    /// board always holds exactly one start. `p` may coincide with the
    /// finish but not with a wall.
    pub fn move_start(&mut self, p: Pos) -> Result<(), GridError> {
        let new = self.index_of(p)?;
        if self.nodes[new].is_wall {
            return Err(GridError::WallOnEndpoint(p));
        }
        let old = self.index_of(self.start)?;
        self.nodes[old].is_start = false;
        self.nodes[new].is_start = true;
        self.start = p;
        Ok(())
    }

    /// Move the finish marker to `p`. Same rules as [`move_start`](Self::move_start).
    pub fn move_finish(&mut self, p: Pos) -> Result<(), GridError> {
        let new = self.index_of(p)?;
        if self.nodes[new].is_wall {
            return Err(GridError::WallOnEndpoint(p));
        }
        let old = self.index_of(self.finish)?;
        self.nodes[old].is_finish = false;
        self.nodes[new].is_finish = true;
        self.finish = p;
        Ok(())
    }

    /// Remove every wall, keeping the endpoints in place.
    pub fn clear_walls(&mut self) {
        for n in self.nodes.iter_mut() {
            n.is_wall = false;
        }
    }

    /// Replace the whole wall layout: every node becomes a wall iff `f`
    /// returns `true` for its position. Endpoints always stay passable.
    pub fn fill_walls(&mut self, mut f: impl FnMut(Pos) -> bool) {
        for n in self.nodes.iter_mut() {
            n.is_wall = !n.is_endpoint() && f(n.pos());
        }
    }
}

impl Index<Pos> for Grid {
    type Output = Node;

    /// Panics when `p` is off the board; use [`Grid::node`] for a checked
    /// lookup.
    fn index(&self, p: Pos) -> &Node {
        match self.dims.index(p) {
            Some(i) => &self.nodes[i],
            None => panic!("position {p} outside {} board", self.dims),
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.nodes.chunks(self.dims.cols() as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for n in row {
                write!(f, "{}", n.glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: &str = "
S.#
.#.
..F";

    #[test]
    fn new_sets_endpoints() {
        let g = Grid::new(3, 4, Pos::new(0, 0), Pos::new(2, 3)).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.nodes().len(), 12);
        assert!(g[Pos::new(0, 0)].is_start());
        assert!(g[Pos::new(2, 3)].is_finish());
        assert_eq!(g.iter().filter(|n| n.is_start()).count(), 1);
        assert_eq!(g.iter().filter(|n| n.is_finish()).count(), 1);
        assert_eq!(g.wall_count(), 0);
    }

    #[test]
    fn node_positions_match_slots() {
        let g = Grid::new(4, 5, Pos::new(1, 1), Pos::new(3, 4)).unwrap();
        for (p, n) in g.dims().iter().zip(g.iter()) {
            assert_eq!(n.pos(), p);
        }
    }

    #[test]
    fn new_rejects_bad_input() {
        assert_eq!(
            Grid::new(0, 5, Pos::ZERO, Pos::ZERO),
            Err(GridError::EmptyBoard(Dims::new(0, 5)))
        );
        assert!(matches!(
            Grid::new(3, 3, Pos::new(3, 0), Pos::ZERO),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            Grid::new(3, 3, Pos::ZERO, Pos::new(0, -1)),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn same_start_and_finish_allowed() {
        let g = Grid::new(2, 2, Pos::new(1, 1), Pos::new(1, 1)).unwrap();
        let n = g[Pos::new(1, 1)];
        assert!(n.is_start() && n.is_finish());
    }

    #[test]
    fn parse_and_display_round_trip() {
        let g = Grid::parse(BOARD).unwrap();
        assert_eq!(g.dims(), Dims::new(3, 3));
        assert_eq!(g.start(), Pos::new(0, 0));
        assert_eq!(g.finish(), Pos::new(2, 2));
        assert!(g.is_wall(Pos::new(0, 2)));
        assert!(g.is_wall(Pos::new(1, 1)));
        assert_eq!(g.wall_count(), 2);
        assert_eq!(g.to_string(), BOARD.trim_start());
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            Grid::parse("S.\n.F."),
            Err(GridError::InconsistentSize(_))
        ));
        assert_eq!(
            Grid::parse("S.x\n..F"),
            Err(GridError::InvalidChar {
                ch: 'x',
                pos: Pos::new(0, 2)
            })
        );
        assert_eq!(
            Grid::parse("...\n..F"),
            Err(GridError::Endpoint {
                marker: 'S',
                count: 0
            })
        );
        assert_eq!(
            Grid::parse("S.F\n..F"),
            Err(GridError::Endpoint {
                marker: 'F',
                count: 2
            })
        );
    }

    #[test]
    fn walls_cannot_cover_endpoints() {
        let mut g = Grid::parse(BOARD).unwrap();
        assert_eq!(
            g.set_wall(Pos::new(0, 0), true),
            Err(GridError::WallOnEndpoint(Pos::new(0, 0)))
        );
        assert_eq!(
            g.toggle_wall(Pos::new(2, 2)),
            Err(GridError::WallOnEndpoint(Pos::new(2, 2)))
        );
        assert!(!g.is_wall(Pos::new(0, 0)));
    }

    #[test]
    fn toggle_wall_flips() {
        let mut g = Grid::parse(BOARD).unwrap();
        assert_eq!(g.toggle_wall(Pos::new(1, 0)), Ok(true));
        assert!(g.is_wall(Pos::new(1, 0)));
        assert_eq!(g.toggle_wall(Pos::new(1, 0)), Ok(false));
        assert!(g.is_passable(Pos::new(1, 0)));
        assert!(g.toggle_wall(Pos::new(5, 5)).is_err());
    }

    #[test]
    fn move_endpoints() {
        let mut g = Grid::parse(BOARD).unwrap();
        g.move_start(Pos::new(1, 0)).unwrap();
        assert_eq!(g.start(), Pos::new(1, 0));
        assert!(!g[Pos::new(0, 0)].is_start());
        assert!(g[Pos::new(1, 0)].is_start());
        assert_eq!(g.iter().filter(|n| n.is_start()).count(), 1);

        assert_eq!(
            g.move_finish(Pos::new(1, 1)),
            Err(GridError::WallOnEndpoint(Pos::new(1, 1)))
        );
        assert_eq!(g.finish(), Pos::new(2, 2));

        g.move_finish(Pos::new(0, 1)).unwrap();
        assert_eq!(g.finish(), Pos::new(0, 1));
        assert_eq!(g.iter().filter(|n| n.is_finish()).count(), 1);
    }

    #[test]
    fn clear_walls_keeps_endpoints() {
        let mut g = Grid::parse(BOARD).unwrap();
        g.clear_walls();
        assert_eq!(g.wall_count(), 0);
        assert_eq!(g.start(), Pos::new(0, 0));
        assert_eq!(g.finish(), Pos::new(2, 2));
    }

    #[test]
    fn fill_walls_spares_endpoints() {
        let mut g = Grid::parse(BOARD).unwrap();
        g.fill_walls(|_| true);
        assert_eq!(g.wall_count(), 7);
        assert!(g.is_passable(g.start()));
        assert!(g.is_passable(g.finish()));

        g.fill_walls(|p| p.row == 1);
        assert_eq!(g.to_string(), "S..\n###\n..F");
    }

    #[test]
    fn clone_is_independent() {
        let g = Grid::parse(BOARD).unwrap();
        let mut h = g.clone();
        h.set_wall(Pos::new(1, 0), true).unwrap();
        assert!(!g.is_wall(Pos::new(1, 0)));
        assert!(h.is_wall(Pos::new(1, 0)));
    }

    #[test]
    fn off_board_queries() {
        let g = Grid::parse(BOARD).unwrap();
        assert!(g.node(Pos::new(-1, 0)).is_none());
        assert!(!g.is_wall(Pos::new(9, 9)));
        assert!(!g.is_passable(Pos::new(9, 9)));
    }
}
