use crate::maze::Direction;

/// A maze cell: four wall flags (`true` means the wall is present) and the
/// visited flag used while carving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    visited: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::ENCLOSED
    }
}

impl Cell {
    /// A fresh cell with all four walls present, not yet visited.
    pub const ENCLOSED: Cell = Cell {
        up: true,
        down: true,
        left: true,
        right: true,
        visited: false,
    };

    /// Builds an unvisited cell with the given walls present.
    pub fn with_walls(up: bool, down: bool, left: bool, right: bool) -> Self {
        Cell {
            up,
            down,
            left,
            right,
            visited: false,
        }
    }

    /// Whether the wall on the given side is present.
    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Whether the given side is open (wall removed).
    pub fn is_open(&self, direction: Direction) -> bool {
        !self.has_wall(direction)
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Number of open sides, between 0 and 4.
    pub fn open_count(&self) -> usize {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.is_open(d))
            .count()
    }

    pub(crate) fn remove_wall(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.up = false,
            Direction::Down => self.down = false,
            Direction::Left => self.left = false,
            Direction::Right => self.right = false,
        }
    }

    pub(crate) fn mark_visited(&mut self) {
        self.visited = true;
    }
}
