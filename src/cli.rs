use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::application::LifeConfig;
use crate::domain::Orientation;

/// Conway's Game of Life in the terminal
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = 150, value_name = "CELLS")]
    pub width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 50, value_name = "CELLS")]
    pub height: usize,

    /// Seed pattern to place (see --list-patterns)
    #[arg(short, long, default_value = "glider", value_name = "NAME")]
    pub pattern: String,

    /// Place no pattern at all
    #[arg(long, conflicts_with = "pattern")]
    pub no_pattern: bool,

    /// Direction the pattern faces: up, right, down or left
    #[arg(short, long, default_value = "up", value_name = "FACE")]
    pub orientation: Orientation,

    /// Row of the pattern's top-left corner
    #[arg(long, default_value_t = 10, value_name = "ROW")]
    pub row: usize,

    /// Column of the pattern's top-left corner
    #[arg(long, default_value_t = 10, value_name = "COL")]
    pub col: usize,

    /// Text drawn for a live cell
    #[arg(long, default_value = "*", value_name = "GLYPH")]
    pub alive: String,

    /// Text drawn for a dead cell
    #[arg(long, default_value = "-", value_name = "GLYPH")]
    pub dead: String,

    /// Delay between generations in milliseconds
    #[arg(short, long, default_value_t = 17, value_name = "MS")]
    pub tick_ms: u64,

    /// Stop after this many generations instead of running forever
    #[arg(short, long, value_name = "N")]
    pub generations: Option<u64>,

    /// Fill the grid randomly with this live-cell density (0.0 to 1.0)
    #[arg(long, value_name = "DENSITY")]
    pub random: Option<f64>,

    /// Seed for --random, for reproducible boards
    #[arg(long, value_name = "SEED", requires = "random")]
    pub seed: Option<u64>,

    /// Compute each generation on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Show a status line under the grid
    #[arg(long)]
    pub stats: bool,

    /// Print the available patterns and exit
    #[arg(long)]
    pub list_patterns: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output on stderr
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a file in addition to stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Number of threads for --parallel.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,
}

impl Cli {
    pub fn to_config(&self) -> LifeConfig {
        LifeConfig {
            width: self.width,
            height: self.height,
            alive_glyph: self.alive.clone(),
            dead_glyph: self.dead.clone(),
            pattern: (!self.no_pattern).then(|| self.pattern.clone()),
            orientation: self.orientation,
            row_offset: self.row,
            col_offset: self.col,
            tick: Duration::from_millis(self.tick_ms),
            generations: self.generations,
            parallel: self.parallel,
            random_density: self.random,
            seed: self.seed,
            show_stats: self.stats,
        }
    }
}
