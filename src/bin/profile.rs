use clap::Parser;
use hunt_maze::app::{App, logging::init_logging};

/// Headless profiling: carve large mazes repeatedly without a terminal.
#[derive(Parser)]
#[command(name = "profile")]
struct ProfileArgs {
    /// Number of mazes to generate
    iterations: Option<usize>,

    /// Side length of the square maze
    #[arg(long, default_value_t = u8::MAX as u16)]
    size: u16,

    /// Random seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> hunt_maze::Result<()> {
    let args = ProfileArgs::parse();
    let _log_guard = init_logging("hunt-maze-profile.log".as_ref(), true)?;

    let app = App::default();
    let report = app.profile(args.size, args.size, args.iterations, args.seed)?;
    println!("{report}");
    Ok(())
}
