pub mod cli;
pub mod logging;
pub mod renderer;

use std::{
    io::{Stdout, Write},
    time::{Duration, Instant},
};

use crossterm::{
    ExecutableCommand,
    style::{self, Attribute, Color, Stylize},
};

use crate::{
    analysis::{Report, classify_grid, classify_repeated},
    app::{
        cli::Cli,
        renderer::{Lattice, animate, draw, warn_too_small},
    },
    error::{MazeError, Result},
    generators::{CarveEvent, HuntAndKill, generate, get_rng},
    maze::Grid,
};

pub struct App {
    /// Pause after each carved passage when animating
    frame_delay: Duration,
    /// Maximum number of carve events buffered between the compute and render threads
    max_events_in_channel: usize,
}

impl Default for App {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(15),
            max_events_in_channel: 1000,
        }
    }
}

impl App {
    /// Generate, optionally display, and report on mazes as configured by `cli`.
    pub fn run(&self, cli: &Cli) -> Result<()> {
        let mut stdout = std::io::stdout();
        tracing::info!(
            "Generating {} maze(s) of {}x{} (seed: {:?})",
            cli.runs,
            cli.rows,
            cli.columns,
            cli.seed
        );

        let report = if cli.runs == 1 {
            let grid = if cli.should_animate() {
                self.generate_animated(&mut stdout, cli.rows, cli.columns, cli.seed)?
            } else {
                let grid = generate(cli.rows, cli.columns, &mut get_rng(cli.seed))?;
                if cli.should_render() {
                    App::render(&mut stdout, &grid)?;
                }
                grid
            };
            classify_grid(&grid)
        } else {
            classify_repeated(cli.rows, cli.columns, cli.runs, cli.seed)?
        };

        tracing::info!(
            "Classified {} cells over {} run(s)",
            report.total(),
            report.runs()
        );
        App::print_report(&mut stdout, &report)?;
        Ok(())
    }

    /// Print a finished maze, or a warning if the terminal is too small for it.
    fn render(stdout: &mut Stdout, grid: &Grid) -> Result<()> {
        if Lattice::fits_terminal(grid.rows(), grid.columns()) {
            draw(stdout, &Lattice::from_grid(grid))?;
        } else {
            warn_too_small(stdout, grid.rows(), grid.columns())?;
        }
        Ok(())
    }

    /// Carve on a compute thread while this thread replays the carve events.
    /// Falls back to a plain render if the maze does not fit the terminal.
    fn generate_animated(
        &self,
        stdout: &mut Stdout,
        rows: u16,
        columns: u16,
        seed: Option<u64>,
    ) -> Result<Grid> {
        // Validate dimensions before spawning anything
        let mut grid = Grid::new(rows, columns)?;
        if !Lattice::fits_terminal(rows, columns) {
            HuntAndKill::new(&mut grid, &mut get_rng(seed)).run();
            grid.carve_entrance_and_exit();
            App::render(stdout, &grid)?;
            return Ok(grid);
        }

        let (carve_event_tx, carve_event_rx) =
            std::sync::mpsc::sync_channel::<CarveEvent>(self.max_events_in_channel);
        let compute_thread_handle = std::thread::spawn(move || {
            let mut rng = get_rng(seed);
            HuntAndKill::new(&mut grid, &mut rng)
                .with_events(carve_event_tx)
                .run();
            grid
            // The carver and its sender are dropped here, ending the animation
        });

        animate(stdout, rows, columns, carve_event_rx, self.frame_delay)?;

        let mut grid = compute_thread_handle
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
        grid.carve_entrance_and_exit();

        // Redraw over the animation so the entrance and exit show up
        stdout.execute(crossterm::cursor::MoveTo(0, 0))?;
        draw(stdout, &Lattice::from_grid(&grid))?;
        Ok(grid)
    }

    fn print_report(stdout: &mut Stdout, report: &Report) -> Result<()> {
        stdout.execute(style::PrintStyledContent(
            "Maze complexity\r\n"
                .with(Color::Cyan)
                .attribute(Attribute::Bold),
        ))?;
        write!(stdout, "{report}")?;
        stdout.flush()?;
        Ok(())
    }

    /// Profiling mode: carve repeatedly without a terminal, draining carve events
    /// on a second thread the way the animated renderer would.
    pub fn profile(
        &self,
        rows: u16,
        columns: u16,
        num_iterations: Option<usize>,
        seed: Option<u64>,
    ) -> Result<Report> {
        // Validate dimensions and run count before spawning anything
        Grid::new(rows, columns)?;
        let iterations = num_iterations.unwrap_or(1);
        if iterations == 0 {
            return Err(MazeError::InvalidRunCount { runs: iterations });
        }

        let (carve_event_tx, carve_event_rx) =
            std::sync::mpsc::sync_channel::<CarveEvent>(self.max_events_in_channel);

        // For profiling mode, we just discard the events
        let drain_thread_handle =
            std::thread::spawn(move || carve_event_rx.into_iter().count());

        let started = Instant::now();
        let compute_thread_handle = std::thread::spawn(move || {
            let mut rng = get_rng(seed);
            (0..iterations)
                .map(|_| -> Result<Report> {
                    let mut grid = Grid::new(rows, columns)?;
                    HuntAndKill::new(&mut grid, &mut rng)
                        .with_events(carve_event_tx.clone())
                        .run();
                    grid.carve_entrance_and_exit();
                    Ok(classify_grid(&grid))
                })
                .sum::<Result<Report>>()
        });

        let report = compute_thread_handle
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))?;
        let events = drain_thread_handle
            .join()
            .unwrap_or_else(|panic| std::panic::resume_unwind(panic));

        tracing::info!(
            "Profiled {} run(s) of {}x{} in {:?} ({} carve events)",
            iterations,
            rows,
            columns,
            started.elapsed(),
            events
        );
        Ok(report)
    }
}
