//! `pathgrid`: build a board, optionally fill it with a maze, and compare
//! the search strategies on it.

use clap::{Parser, ValueEnum};
use pathgrid_core::{Grid, Pos};
use pathgrid_demo::{DEFAULT_COLS, DEFAULT_ROWS, compare, default_endpoints, logger, render};
use pathgrid_maze::{MazeConfig, MazeGen, MazeStyle};
use pathgrid_paths::Algorithm;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(name = "pathgrid", version, about = "Compare grid search strategies")]
struct Cli {
    /// Board height.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: i32,

    /// Board width.
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: i32,

    /// Start node as `row,col`.
    #[arg(long, value_parser = parse_pos)]
    start: Option<Pos>,

    /// Finish node as `row,col`.
    #[arg(long, value_parser = parse_pos)]
    finish: Option<Pos>,

    /// Run a single strategy instead of all four.
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Fill the board with a generated maze first.
    #[arg(long)]
    maze: bool,

    /// Maze wall layout.
    #[arg(long, value_enum, default_value_t = Style::Scatter)]
    style: Style,

    /// Fraction of cells turned into walls.
    #[arg(long, default_value_t = 0.3)]
    density: f64,

    /// Maze seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the board with each search overlaid.
    #[arg(long)]
    show: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Style {
    Scatter,
    RandomWalk,
}

impl From<Style> for MazeStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Scatter => MazeStyle::Scatter,
            Style::RandomWalk => MazeStyle::RandomWalk,
        }
    }
}

fn parse_pos(s: &str) -> Result<Pos, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{s}`"))?;
    let row = row.trim().parse().map_err(|e| format!("row: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("col: {e}"))?;
    Ok(Pos::new(row, col))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logger::init(logger::level_from_verbosity(cli.verbose))?;

    let (start, finish) = default_endpoints(cli.rows, cli.cols);
    let mut grid = Grid::new(
        cli.rows,
        cli.cols,
        cli.start.unwrap_or(start),
        cli.finish.unwrap_or(finish),
    )?;

    if cli.maze {
        let seed = cli.seed.unwrap_or_else(rand::random);
        let config = MazeConfig {
            style: cli.style.into(),
            density: cli.density,
            ..MazeConfig::default()
        };
        let mut mazegen = MazeGen::with_config(StdRng::seed_from_u64(seed), config)?;
        grid = mazegen.generate(&grid);
        log::info!("maze seed {seed}: {} walls", grid.wall_count());
        println!("seed {seed}");
    }

    let algorithms = match cli.algorithm {
        Some(a) => vec![a],
        None => Algorithm::ALL.to_vec(),
    };
    println!(
        "{} board, start {}, finish {}",
        grid.dims(),
        grid.start(),
        grid.finish()
    );
    for c in compare(&grid, &algorithms)? {
        println!("{c}");
        if cli.show {
            println!("{}\n", render(&grid, &c.result));
        }
    }
    Ok(())
}
