//! Maze generation for pathfinding boards.
//!
//! Provides two wall layouts:
//! - **Scatter**: every non-endpoint cell becomes a wall with probability
//!   `density`; unsolvable layouts are rejected and regenerated.
//! - **Random Walk**: start fully walled and carve open space with a drunk
//!   walk rooted at the start node until the finish has been reached.
//!
//! Either way the result always admits a wall-free walk from start to
//! finish. When every attempt fails, an L-shaped corridor between the two
//! endpoints is carved through the last layout.

use pathgrid_core::{Grid, Pos};
use pathgrid_paths::{Algorithm, Searcher};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::MazeError;

/// Trait for choosing a random neighbor during random-walk carving.
pub trait RandomWalker {
    /// Given a position `p`, return a random neighbor using `rng`.
    fn neighbor(&self, p: Pos, rng: &mut impl Rng) -> Pos;
}

/// A simple 4-directional random walker.
pub struct FourDirectionWalker;

impl RandomWalker for FourDirectionWalker {
    fn neighbor(&self, p: Pos, rng: &mut impl Rng) -> Pos {
        match rng.random_range(0..4u32) {
            0 => p.shift(-1, 0),
            1 => p.shift(1, 0),
            2 => p.shift(0, -1),
            _ => p.shift(0, 1),
        }
    }
}

/// Wall layout algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MazeStyle {
    /// Independent random walls, verified and retried.
    #[default]
    Scatter,
    /// Drunk-walk carving from the start node.
    RandomWalk,
}

/// Maze generator settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub style: MazeStyle,
    /// Fraction of non-endpoint cells that should end up as walls.
    pub density: f64,
    /// How many fresh layouts to try before carving a repair corridor.
    pub max_attempts: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            style: MazeStyle::Scatter,
            density: 0.3,
            max_attempts: 32,
        }
    }
}

impl MazeConfig {
    /// Lowest accepted density; anything sparser is hardly a maze.
    pub const MIN_DENSITY: f64 = 0.05;
    /// Highest accepted density.
    pub const MAX_DENSITY: f64 = 0.6;

    /// Check that the settings describe a usable generator.
    pub fn validate(&self) -> Result<(), MazeError> {
        if !(Self::MIN_DENSITY..=Self::MAX_DENSITY).contains(&self.density) {
            return Err(MazeError::InvalidDensity(self.density));
        }
        if self.max_attempts == 0 {
            return Err(MazeError::NoAttempts);
        }
        Ok(())
    }
}

/// Maze generator producing new wall layouts for a [`Grid`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    config: MazeConfig,
    searcher: Searcher,
}

impl MazeGen<StdRng> {
    /// Create a generator with the default settings and a seeded RNG.
    /// The same seed always yields the same sequence of mazes.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the default settings.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: MazeConfig::default(),
            searcher: Searcher::default(),
        }
    }

    /// Create a generator with custom settings.
    pub fn with_config(rng: R, config: MazeConfig) -> Result<Self, MazeError> {
        config.validate()?;
        Ok(Self {
            rng,
            config,
            searcher: Searcher::default(),
        })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    /// Generate a maze for `grid`.
    ///
    /// Returns a new board with the same size and endpoints. The previous
    /// walls are discarded, the endpoints are never walls and the finish is
    /// always reachable from the start.
    pub fn generate(&mut self, grid: &Grid) -> Grid {
        let dims = grid.dims();
        let mut maze = grid.clone();
        let mut walls = Vec::new();

        for attempt in 1..=self.config.max_attempts {
            walls = match self.config.style {
                MazeStyle::Scatter => self.scatter(&maze),
                MazeStyle::RandomWalk => self.random_walk(&maze, &FourDirectionWalker),
            };
            maze.fill_walls(|p| dims.index(p).is_some_and(|i| walls[i]));
            if self.is_solvable(&maze) {
                log::debug!(
                    "maze {dims}: {} walls after {attempt} attempt(s)",
                    maze.wall_count()
                );
                return maze;
            }
            log::trace!("maze {dims}: attempt {attempt} unsolvable, retrying");
        }

        log::warn!(
            "maze {dims}: no solvable layout in {} attempts, carving a corridor",
            self.config.max_attempts
        );
        for i in corridor(maze.start(), maze.finish()).filter_map(|p| dims.index(p)) {
            walls[i] = false;
        }
        maze.fill_walls(|p| dims.index(p).is_some_and(|i| walls[i]));
        maze
    }

    /// Whether the finish can be reached from the start.
    fn is_solvable(&mut self, maze: &Grid) -> bool {
        matches!(
            self.searcher.search_board(maze, Algorithm::Bfs),
            Ok(r) if r.is_found()
        )
    }

    /// Independent random walls at the configured density.
    fn scatter(&mut self, maze: &Grid) -> Vec<bool> {
        let density = self.config.density;
        maze.iter()
            .map(|n| !n.is_endpoint() && self.rng.random_bool(density))
            .collect()
    }

    /// Carve open space with a random walk rooted at the start.
    ///
    /// The walk stops once the carved share reaches `1 - density`. If the
    /// finish is still walled at that point, a corridor is tunneled from it
    /// toward the start until it meets carved space. Every carved cell is
    /// connected to the start by construction.
    fn random_walk(&mut self, maze: &Grid, walker: &impl RandomWalker) -> Vec<bool> {
        let dims = maze.dims();
        let total = dims.len();
        let target = ((total as f64) * (1.0 - self.config.density)).ceil() as usize;
        let step_limit = total * 64;
        let mut walls = vec![true; total];
        let Some(finish) = dims.index(maze.finish()) else {
            return walls;
        };

        let mut carved = 0usize;
        let mut pos = maze.start();

        for _ in 0..step_limit {
            if let Some(i) = dims.index(pos) {
                if walls[i] {
                    walls[i] = false;
                    carved += 1;
                }
            }
            if carved >= target {
                break;
            }

            // Walk to a neighbor, clamped to bounds.
            let next = walker.neighbor(pos, &mut self.rng);
            if dims.contains(next) {
                pos = next;
            }
        }

        if walls[finish] {
            for i in corridor(maze.finish(), maze.start()).filter_map(|p| dims.index(p)) {
                if !walls[i] {
                    break;
                }
                walls[i] = false;
            }
        }
        walls
    }
}

/// Cells of an L-shaped corridor: along the start's column to the finish
/// row, then along that row to the finish.
fn corridor(from: Pos, to: Pos) -> impl Iterator<Item = Pos> {
    let mut cells = Vec::new();
    let drow = (to.row - from.row).signum();
    let dcol = (to.col - from.col).signum();
    let mut p = from;
    cells.push(p);
    while p.row != to.row {
        p = p.shift(drow, 0);
        cells.push(p);
    }
    while p.col != to.col {
        p = p.shift(0, dcol);
        cells.push(p);
    }
    cells.into_iter()
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let config = MazeConfig {
            style: MazeStyle::RandomWalk,
            density: 0.25,
            max_attempts: 8,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"random-walk\""));
        let back: MazeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
