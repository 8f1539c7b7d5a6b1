use std::fmt;

use crate::maze::{Cell, Direction};

/// Topological category of a cell, by how many sides are open and how they are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// One open side
    DeadEnd,
    /// Two open sides facing each other
    Straightway,
    /// Two open sides at a right angle
    Turn,
    /// Three open sides
    TJunction,
    /// Four open sides
    Crossroad,
}

impl Category {
    /// All categories, in classification order.
    pub const ALL: [Category; 5] = [
        Category::DeadEnd,
        Category::Straightway,
        Category::Turn,
        Category::TJunction,
        Category::Crossroad,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::DeadEnd => write!(f, "Dead ends"),
            Category::Straightway => write!(f, "Straightways"),
            Category::Turn => write!(f, "Turns"),
            Category::TJunction => write!(f, "T-junctions"),
            Category::Crossroad => write!(f, "Crossroads"),
        }
    }
}

/// Classifies a cell by its wall state.
///
/// The checks run in a fixed order, each one relying on the previous ones having
/// failed: once dead ends, straightways and turns are ruled out, at most one wall
/// can remain, so a T-junction is simply "some wall is still present".
/// A fully enclosed cell never appears in a carved maze; it falls through to `Turn`.
pub fn classify(cell: &Cell) -> Category {
    if is_dead_end(cell) {
        Category::DeadEnd
    } else if is_straightway(cell) {
        Category::Straightway
    } else if is_turn(cell) {
        Category::Turn
    } else if is_t_junction(cell) {
        Category::TJunction
    } else {
        Category::Crossroad
    }
}

/// Exactly one open side, whichever it is.
fn is_dead_end(cell: &Cell) -> bool {
    Direction::ALL
        .into_iter()
        .any(|open| Direction::ALL.into_iter().all(|d| cell.is_open(d) == (d == open)))
}

/// Open up and down with left and right walled, or the other way round.
fn is_straightway(cell: &Cell) -> bool {
    let vertical = cell.is_open(Direction::Up) && cell.is_open(Direction::Down);
    let horizontal = cell.is_open(Direction::Left) && cell.is_open(Direction::Right);
    let vertical_walls = cell.has_wall(Direction::Up) && cell.has_wall(Direction::Down);
    let horizontal_walls = cell.has_wall(Direction::Left) && cell.has_wall(Direction::Right);
    (vertical && horizontal_walls) || (horizontal && vertical_walls)
}

/// Two walls meeting at a corner. Only meaningful after dead ends and
/// straightways are excluded.
fn is_turn(cell: &Cell) -> bool {
    [
        (Direction::Left, Direction::Down),
        (Direction::Left, Direction::Up),
        (Direction::Up, Direction::Right),
        (Direction::Right, Direction::Down),
    ]
    .into_iter()
    .any(|(a, b)| cell.has_wall(a) && cell.has_wall(b))
}

/// Any wall left. Only meaningful after the three checks above.
fn is_t_junction(cell: &Cell) -> bool {
    Direction::ALL.into_iter().any(|d| cell.has_wall(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_with_open(open: &[Direction]) -> Cell {
        Cell::with_walls(
            !open.contains(&Direction::Up),
            !open.contains(&Direction::Down),
            !open.contains(&Direction::Left),
            !open.contains(&Direction::Right),
        )
    }

    use Direction::{Down, Left, Right, Up};

    #[test]
    fn test_dead_ends() {
        for open in Direction::ALL {
            assert_eq!(classify(&cell_with_open(&[open])), Category::DeadEnd);
        }
    }

    #[test]
    fn test_straightways() {
        assert_eq!(classify(&cell_with_open(&[Up, Down])), Category::Straightway);
        assert_eq!(
            classify(&cell_with_open(&[Left, Right])),
            Category::Straightway
        );
    }

    #[test]
    fn test_turns() {
        for pair in [[Up, Right], [Right, Down], [Down, Left], [Left, Up]] {
            assert_eq!(classify(&cell_with_open(&pair)), Category::Turn);
        }
    }

    #[test]
    fn test_t_junctions() {
        for wall in Direction::ALL {
            let open = Direction::ALL
                .into_iter()
                .filter(|&d| d != wall)
                .collect::<Vec<_>>();
            assert_eq!(classify(&cell_with_open(&open)), Category::TJunction);
        }
    }

    #[test]
    fn test_crossroad() {
        assert_eq!(classify(&cell_with_open(&Direction::ALL)), Category::Crossroad);
    }

    #[test]
    fn test_enclosed_cell_falls_through_to_turn() {
        assert_eq!(classify(&Cell::ENCLOSED), Category::Turn);
    }

    #[test]
    fn test_every_open_configuration_matches_open_count() {
        for mask in 1u8..16 {
            let open = Direction::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, d)| d)
                .collect::<Vec<_>>();
            let cell = cell_with_open(&open);
            let category = classify(&cell);
            let expected = match open.len() {
                1 => vec![Category::DeadEnd],
                2 => vec![Category::Straightway, Category::Turn],
                3 => vec![Category::TJunction],
                _ => vec![Category::Crossroad],
            };
            assert!(
                expected.contains(&category),
                "open sides {open:?} classified as {category:?}"
            );
            // Classification only reads the cell
            assert_eq!(classify(&cell), category);
        }
    }
}
