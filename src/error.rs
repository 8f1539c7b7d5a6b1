//! Error types for maze generation and reporting

use std::fmt;

/// Errors surfaced to callers of the maze library and binaries.
/// Broken internal invariants are not represented here; they panic.
#[derive(Debug)]
pub enum MazeError {
    /// Grid dimensions below the 2x2 minimum
    InvalidDimension {
        /// Requested number of rows
        rows: u16,
        /// Requested number of columns
        columns: u16,
    },

    /// Repeated classification asked for zero runs
    InvalidRunCount {
        /// Requested number of runs
        runs: usize,
    },

    /// Terminal or log file I/O failure
    Io(std::io::Error),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { rows, columns } => {
                write!(
                    f,
                    "Invalid maze dimensions {rows}x{columns}: rows and columns must be at least 2"
                )
            }
            Self::InvalidRunCount { runs } => {
                write!(f, "Invalid run count {runs}: at least one run is required")
            }
            Self::Io(source) => write!(f, "I/O error: {source}"),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(source) => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(source: std::io::Error) -> Self {
        Self::Io(source)
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;
