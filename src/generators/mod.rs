use rand::{Rng, SeedableRng, rngs::StdRng};

pub mod hunt_and_kill;

pub use hunt_and_kill::{CarveEvent, HuntAndKill, Phase};

use crate::{
    error::Result,
    maze::{Direction, Grid},
};

/// Source of uniformly distributed direction draws in `[0, 4)`.
/// Carving depends on nothing else from its environment.
pub trait RandomSource {
    fn next_direction(&mut self) -> Direction;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_direction(&mut self) -> Direction {
        Direction::from_index(self.random_range(0..4u8))
    }
}

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a finished perfect maze: carved with Hunt-and-Kill, entrance and
/// exit opened.
/// Fails with `InvalidDimension` before any carving if rows or columns < 2.
pub fn generate<R: RandomSource + ?Sized>(rows: u16, columns: u16, rng: &mut R) -> Result<Grid> {
    let mut grid = Grid::new(rows, columns)?;
    HuntAndKill::new(&mut grid, rng).run();
    grid.carve_entrance_and_exit();
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MazeError;

    #[test]
    fn test_rng_draws_every_direction() {
        let mut rng = get_rng(Some(7));
        let mut seen = [false; 4];
        for _ in 0..200 {
            let drawn = rng.next_direction();
            let idx = Direction::ALL.iter().position(|&d| d == drawn).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = get_rng(Some(42));
        let mut b = get_rng(Some(42));
        for _ in 0..50 {
            assert_eq!(a.next_direction(), b.next_direction());
        }
    }

    #[test]
    fn test_generate_rejects_invalid_dimensions() {
        let mut rng = get_rng(Some(0));
        assert!(matches!(
            generate(1, 1, &mut rng),
            Err(MazeError::InvalidDimension { .. })
        ));
        assert!(generate(2, 1, &mut rng).is_err());
    }

    #[test]
    fn test_generate_opens_entrance_and_exit() {
        let mut rng = get_rng(Some(3));
        let grid = generate(6, 9, &mut rng).unwrap();
        assert!(grid[(0, 0)].is_open(Direction::Left));
        assert!(grid[(5, 8)].is_open(Direction::Right));
        assert!(grid.is_fully_visited());
        assert_eq!(grid.passage_count(), 6 * 9 - 1);
    }
}
