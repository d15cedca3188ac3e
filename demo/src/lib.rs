//! Strategy comparison used by the `pathgrid` binary.
//!
//! Runs the search strategies on one board, timing each run, and renders
//! the outcome as text.

pub mod logger;

use std::fmt;
use std::time::{Duration, Instant};

use pathgrid_core::{Grid, Pos};
use pathgrid_paths::{Algorithm, SearchError, SearchResult, Searcher};

pub const DEFAULT_ROWS: i32 = 40;
pub const DEFAULT_COLS: i32 = 40;

/// Default endpoints: two cells in from the top-left and bottom-right
/// corners, clamped for small boards.
pub fn default_endpoints(rows: i32, cols: i32) -> (Pos, Pos) {
    let start = Pos::new(2.min(rows - 1).max(0), 2.min(cols - 1).max(0));
    let finish = Pos::new((rows - 2).max(0), (cols - 2).max(0));
    (start, finish)
}

/// One strategy's outcome on a board.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub algorithm: Algorithm,
    pub result: SearchResult,
    pub elapsed: Duration,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.result.is_found() {
            format!("{} steps", self.result.steps())
        } else {
            "unreachable".to_string()
        };
        write!(
            f,
            "{:<9}{:>6} visited  {:<12}{:>9.3} ms",
            self.algorithm,
            self.result.visited.len(),
            path,
            self.elapsed.as_secs_f64() * 1000.0
        )
    }
}

/// Run each of `algorithms` from the board's start to its finish and
/// measure its wall-clock time.
pub fn compare(grid: &Grid, algorithms: &[Algorithm]) -> Result<Vec<Comparison>, SearchError> {
    let mut searcher = Searcher::new(grid.dims());
    algorithms
        .iter()
        .map(|&algorithm| {
            let t0 = Instant::now();
            let result = searcher.search_board(grid, algorithm)?;
            let elapsed = t0.elapsed();
            log::info!("{algorithm} finished in {elapsed:?}");
            Ok(Comparison {
                algorithm,
                result,
                elapsed,
            })
        })
        .collect()
}

/// Text form of the board with the search overlaid: `*` marks the path and
/// `o` the other visited cells.
pub fn render(grid: &Grid, result: &SearchResult) -> String {
    let mut glyphs: Vec<char> = grid.iter().map(|n| n.glyph()).collect();
    let dims = grid.dims();
    let mut mark = |p: Pos, ch: char| {
        if let Some(i) = dims.index(p) {
            // Endpoints and walls keep their glyph.
            if matches!(glyphs[i], '.' | 'o') {
                glyphs[i] = ch;
            }
        }
    };
    for &p in &result.visited {
        mark(p, 'o');
    }
    for &p in &result.path {
        mark(p, '*');
    }

    let mut out = String::with_capacity(glyphs.len() + dims.rows() as usize);
    for (i, row) in glyphs.chunks(dims.cols() as usize).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(row);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_match_board() {
        assert_eq!(default_endpoints(40, 40), (Pos::new(2, 2), Pos::new(38, 38)));
        assert_eq!(default_endpoints(1, 5), (Pos::new(0, 2), Pos::new(0, 3)));
        let (s, f) = default_endpoints(1, 1);
        assert_eq!((s, f), (Pos::ZERO, Pos::ZERO));
    }

    #[test]
    fn compare_runs_each_algorithm_once() {
        let grid = Grid::new(6, 6, Pos::new(0, 0), Pos::new(5, 5)).unwrap();
        let report = compare(&grid, &Algorithm::ALL).unwrap();
        let algorithms: Vec<_> = report.iter().map(|c| c.algorithm).collect();
        assert_eq!(algorithms, Algorithm::ALL.to_vec());
        for c in &report {
            assert!(c.result.is_found());
            if c.algorithm.is_optimal() {
                assert_eq!(c.result.steps(), 10);
            }
        }
    }

    #[test]
    fn comparison_rows_align() {
        let grid = Grid::new(4, 4, Pos::new(0, 0), Pos::new(3, 3)).unwrap();
        let rows: Vec<String> = compare(&grid, &Algorithm::ALL)
            .unwrap()
            .iter()
            .map(|c| c.to_string())
            .collect();
        for (row, a) in rows.iter().zip(Algorithm::ALL) {
            assert_eq!(&row[..9], format!("{:<9}", a.name()));
        }
        assert!(rows.iter().all(|r| r.len() == rows[0].len()));
    }

    #[test]
    fn compare_reports_unreachable() {
        let grid = Grid::parse("S#F").unwrap();
        let report = compare(&grid, &[Algorithm::Bfs]).unwrap();
        assert!(!report[0].result.is_found());
        assert!(report[0].to_string().contains("unreachable"));
    }

    #[test]
    fn render_overlays_search() {
        let grid = Grid::parse(
            "
S..
.#.
..F",
        )
        .unwrap();
        let result = pathgrid_paths::search_board(&grid, Algorithm::Bfs).unwrap();
        assert_eq!(render(&grid, &result), "Soo\n*#o\n**F");
    }
}
