//! Hunt-and-Kill perfect maze generation with cell topology statistics.
//!
//! A maze is carved on a grid of cells with four wall flags each, then every
//! cell is classified as a dead end, straightway, turn, T-junction or
//! crossroad, and the counts are reported as percentages.

pub mod analysis;
pub mod app;
pub mod error;
pub mod generators;
pub mod maze;

pub use analysis::{Category, Report, classify_grid, generate_and_classify};
pub use error::{MazeError, Result};
pub use generators::{RandomSource, generate, get_rng};
pub use maze::{Cell, Coord, Direction, Grid};
