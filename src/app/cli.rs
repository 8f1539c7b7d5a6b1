//! Command-line arguments for the maze generator

use std::path::PathBuf;

use clap::Parser;

/// Default maze height in cells
pub const DEFAULT_ROWS: u16 = 20;
/// Default maze width in cells
pub const DEFAULT_COLUMNS: u16 = 20;
/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "hunt-maze.log";

#[derive(Parser, Debug, Clone)]
#[command(name = "hunt-maze")]
#[command(
    version,
    about = "Generate a perfect maze with Hunt-and-Kill and report its cell topology"
)]
/// Command-line arguments for maze generation and analysis
pub struct Cli {
    /// Number of rows in the maze (at least 2)
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: u16,

    /// Number of columns in the maze (at least 2)
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: u16,

    /// Number of mazes to generate; counts are summed across runs
    #[arg(short = 'n', long, default_value_t = 1)]
    pub runs: usize,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Animate carving in the terminal (single run only)
    #[arg(short, long)]
    pub animate: bool,

    /// Skip printing the maze, report statistics only
    #[arg(long)]
    pub no_render: bool,

    /// File receiving log output
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether the finished maze should be printed.
    pub fn should_render(&self) -> bool {
        self.runs == 1 && !self.no_render
    }

    /// Whether carving should be animated.
    pub fn should_animate(&self) -> bool {
        self.animate && self.should_render()
    }
}
