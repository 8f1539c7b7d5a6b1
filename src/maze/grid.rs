use crate::error::{MazeError, Result};
use crate::maze::{Coord, Direction, cell::Cell};

/// Rectangular array of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[Cell]>,
    rows: u16,
    columns: u16,
}

impl Grid {
    /// Smallest number of rows or columns a grid can have.
    pub const MIN_DIMENSION: u16 = 2;

    /// Creates a grid of fully enclosed, unvisited cells.
    /// Fails with `InvalidDimension` if either dimension is below 2.
    pub fn new(rows: u16, columns: u16) -> Result<Self> {
        if rows < Self::MIN_DIMENSION || columns < Self::MIN_DIMENSION {
            return Err(MazeError::InvalidDimension { rows, columns });
        }
        let cells = vec![Cell::ENCLOSED; rows as usize * columns as usize].into_boxed_slice();
        Ok(Grid {
            cells,
            rows,
            columns,
        })
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid holds at least 2x2 cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Checks if the given coordinate is within the bounds of the grid.
    pub fn is_in_bounds(&self, (row, col): Coord) -> bool {
        row < self.rows && col < self.columns
    }

    fn ravel_index(&self, (row, col): Coord) -> usize {
        if !self.is_in_bounds((row, col)) {
            panic!(
                "Coordinate ({row}, {col}) is out of bounds for a {}x{} grid",
                self.rows, self.columns
            );
        }
        row as usize * self.columns as usize + col as usize
    }

    /// The neighbor one step away in `direction`, if it lies inside the grid.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let next = direction.step(coord);
        self.is_in_bounds(next).then_some(next)
    }

    /// Top-left cell, whose left side becomes the entrance.
    pub fn entrance(&self) -> Coord {
        (0, 0)
    }

    /// Bottom-right cell, whose right side becomes the exit.
    pub fn exit(&self) -> Coord {
        (self.rows - 1, self.columns - 1)
    }

    pub(crate) fn mark_visited(&mut self, coord: Coord) {
        let idx = self.ravel_index(coord);
        self.cells[idx].mark_visited();
    }

    /// Removes the wall between `from` and its neighbor in `direction`, on both cells.
    /// Returns the neighbor's coordinate.
    ///
    /// # Panics
    /// * If `from` is out of bounds
    /// * If the neighbor in `direction` is out of bounds
    pub fn open_passage(&mut self, from: Coord, direction: Direction) -> Coord {
        let Some(to) = self.neighbor(from, direction) else {
            panic!("Cannot open a passage {direction} from {from:?}: neighbor is out of bounds");
        };
        let from_idx = self.ravel_index(from);
        let to_idx = self.ravel_index(to);
        self.cells[from_idx].remove_wall(direction);
        self.cells[to_idx].remove_wall(direction.opposite());
        to
    }

    /// Opens the left side of the entrance cell and the right side of the exit cell.
    pub fn carve_entrance_and_exit(&mut self) {
        let entrance = self.ravel_index(self.entrance());
        let exit = self.ravel_index(self.exit());
        self.cells[entrance].remove_wall(Direction::Left);
        self.cells[exit].remove_wall(Direction::Right);
    }

    /// Iterates over all cells in row-major order with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        let columns = self.columns as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (((i / columns) as u16, (i % columns) as u16), cell))
    }

    /// Whether every cell has been visited.
    pub fn is_fully_visited(&self) -> bool {
        self.cells.iter().all(Cell::is_visited)
    }

    /// Number of open passages between pairs of adjacent cells.
    /// Boundary openings (entrance and exit) are not counted.
    pub fn passage_count(&self) -> usize {
        self.cells()
            .map(|(coord, cell)| {
                [Direction::Down, Direction::Right]
                    .into_iter()
                    .filter(|&d| self.neighbor(coord, d).is_some() && cell.is_open(d))
                    .count()
            })
            .sum()
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[self.ravel_index(index)]
    }
}
