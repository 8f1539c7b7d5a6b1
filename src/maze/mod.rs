pub mod cell;
pub mod grid;

pub use cell::Cell;
pub use grid::Grid;

/// Cell coordinate as (row, column).
pub type Coord = (u16, u16);

/// One of the four sides of a cell, and the direction of the neighbor behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order of their random draw index.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Maps a draw in `[0, 4)` to a direction: 0 up, 1 down, 2 left, 3 right.
    ///
    /// # Panics
    /// If `index >= 4`. A random source producing such a value is broken.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            3 => Direction::Right,
            _ => panic!("Direction index {index} is outside [0, 4)"),
        }
    }

    /// The side of the neighboring cell that faces back to this one.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Coordinate one step away in this direction.
    /// NOTE: Stepping off the top or left edge wraps to u16::MAX, which no grid
    /// can contain, so a plain bounds check filters it out.
    pub fn step(self, (row, col): Coord) -> Coord {
        match self {
            Direction::Up => (row.wrapping_sub(1), col),
            Direction::Down => (row.saturating_add(1), col),
            Direction::Left => (row, col.wrapping_sub(1)),
            Direction::Right => (row, col.saturating_add(1)),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Get in-bounds neighbors of a cell, paired with the direction leading to them.
/// A neighbor is a cell one step away in the cardinal directions (up, down, left, right).
pub fn get_neighbors(coord: Coord, grid: &Grid) -> impl Iterator<Item = (Direction, Coord)> + '_ {
    let in_bounds = grid.is_in_bounds(coord);
    Direction::ALL
        .into_iter()
        .filter(move |_| in_bounds)
        .map(move |direction| (direction, direction.step(coord)))
        .filter(move |&(_, c)| grid.is_in_bounds(c))
}
