pub mod classifier;
pub mod report;

pub use classifier::{Category, classify};
pub use report::{Report, classify_grid, classify_repeated, classify_repeated_with};

use crate::error::Result;

/// Generates `runs` fresh mazes of the given size and sums their classification reports.
pub fn generate_and_classify(rows: u16, columns: u16, runs: usize) -> Result<Report> {
    classify_repeated(rows, columns, runs, None)
}
