use std::{fmt, iter::Sum, ops::Add};

use crate::{
    analysis::classifier::{Category, classify},
    error::{MazeError, Result},
    generators::{RandomSource, generate, get_rng},
    maze::Grid,
};

/// Category counts over one or more classified grids.
///
/// Reports from independent runs combine with `+`; percentages are always
/// recomputed from the summed counts over the summed total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    runs: usize,
    total: usize,
    dead_ends: usize,
    straightways: usize,
    turns: usize,
    t_junctions: usize,
    crossroads: usize,
}

impl Report {
    /// Number of grids that contributed to this report.
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Number of classified cells.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::DeadEnd => self.dead_ends,
            Category::Straightway => self.straightways,
            Category::Turn => self.turns,
            Category::TJunction => self.t_junctions,
            Category::Crossroad => self.crossroads,
        }
    }

    /// Share of cells in `category`, from 0 to 100.
    pub fn percent(&self, category: Category) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(category) as f64 / self.total as f64 * 100.0
    }

    fn record(&mut self, category: Category) {
        self.total += 1;
        match category {
            Category::DeadEnd => self.dead_ends += 1,
            Category::Straightway => self.straightways += 1,
            Category::Turn => self.turns += 1,
            Category::TJunction => self.t_junctions += 1,
            Category::Crossroad => self.crossroads += 1,
        }
    }
}

impl Add for Report {
    type Output = Report;

    fn add(self, other: Report) -> Report {
        Report {
            runs: self.runs + other.runs,
            total: self.total + other.total,
            dead_ends: self.dead_ends + other.dead_ends,
            straightways: self.straightways + other.straightways,
            turns: self.turns + other.turns,
            t_junctions: self.t_junctions + other.t_junctions,
            crossroads: self.crossroads + other.crossroads,
        }
    }
}

impl Sum for Report {
    fn sum<I: Iterator<Item = Report>>(iter: I) -> Report {
        iter.fold(Report::default(), |acc, report| acc + report)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.runs == 1 { "" } else { "s" };
        writeln!(f, "Complexity analysis ({} run{plural})", self.runs)?;
        writeln!(f, "  {:<14}: {}", "Total cells", self.total)?;
        for category in Category::ALL {
            writeln!(f, "  {:<14}: {}", category.to_string(), self.count(category))?;
        }
        writeln!(f, "Percentages")?;
        for category in Category::ALL {
            writeln!(
                f,
                "  {:<14}: {:.2}%",
                category.to_string(),
                self.percent(category)
            )?;
        }
        Ok(())
    }
}

/// Classifies every cell of a finished grid. `total` is always `rows * columns`.
pub fn classify_grid(grid: &Grid) -> Report {
    let mut report = Report {
        runs: 1,
        ..Report::default()
    };
    grid.cells().for_each(|(_, cell)| report.record(classify(cell)));
    report
}

/// Generates and classifies `runs` independent mazes drawing from `rng`, and
/// sums their reports.
/// Fails with `InvalidRunCount` if `runs` is 0, or `InvalidDimension` for
/// rows or columns below 2.
pub fn classify_repeated_with<R: RandomSource + ?Sized>(
    rows: u16,
    columns: u16,
    runs: usize,
    rng: &mut R,
) -> Result<Report> {
    if runs == 0 {
        return Err(MazeError::InvalidRunCount { runs });
    }

    let report = (0..runs)
        .map(|_| generate(rows, columns, rng).map(|grid| classify_grid(&grid)))
        .sum::<Result<Report>>()?;
    tracing::debug!(
        "[analysis] classified {} runs of {}x{}: {} cells",
        runs,
        rows,
        columns,
        report.total()
    );
    Ok(report)
}

/// Like `classify_repeated_with`, with a fresh RNG, seeded when `seed` is given.
pub fn classify_repeated(
    rows: u16,
    columns: u16,
    runs: usize,
    seed: Option<u64>,
) -> Result<Report> {
    classify_repeated_with(rows, columns, runs, &mut get_rng(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;

    #[test]
    fn test_percentages_of_two_by_two() {
        let report = Report {
            runs: 1,
            total: 4,
            dead_ends: 2,
            turns: 2,
            ..Report::default()
        };
        let formatted = Category::ALL
            .into_iter()
            .map(|c| format!("{:.2}%", report.percent(c)))
            .collect::<Vec<_>>();
        assert_eq!(
            formatted,
            vec!["50.00%", "0.00%", "50.00%", "0.00%", "0.00%"]
        );
    }

    #[test]
    fn test_classify_grid_counts_every_cell() {
        let mut rng = get_rng(Some(11));
        let grid = generate(8, 13, &mut rng).unwrap();
        let report = classify_grid(&grid);
        assert_eq!(report.runs(), 1);
        assert_eq!(report.total(), 8 * 13);
        let sum: usize = Category::ALL.into_iter().map(|c| report.count(c)).sum();
        assert_eq!(sum, report.total());
        let percent: f64 = Category::ALL.into_iter().map(|c| report.percent(c)).sum();
        assert!((percent - 100.0).abs() < 1e-9);
        // Idempotent on an unmodified grid
        assert_eq!(classify_grid(&grid), report);
    }

    #[test]
    fn test_two_by_two_has_at_most_one_dead_end() {
        for seed in 0..50 {
            let mut rng = get_rng(Some(seed));
            let grid = generate(2, 2, &mut rng).unwrap();
            assert_eq!(grid.passage_count(), 3);
            let report = classify_grid(&grid);
            assert_eq!(report.total(), 4);
            assert!(report.count(Category::DeadEnd) <= 1);
        }
    }

    #[test]
    fn test_scripted_layout_classification() {
        // Passages (0,0)-(1,0), (1,0)-(1,1), (1,1)-(0,1) plus entrance and exit
        let mut grid = Grid::new(2, 2).unwrap();
        grid.open_passage((0, 0), Direction::Down);
        grid.open_passage((1, 0), Direction::Right);
        grid.open_passage((1, 1), Direction::Up);
        grid.carve_entrance_and_exit();
        let report = classify_grid(&grid);
        assert_eq!(report.count(Category::DeadEnd), 1);
        assert_eq!(report.count(Category::Turn), 2);
        assert_eq!(report.count(Category::TJunction), 1);
    }

    #[test]
    fn test_repeated_equals_sum_of_runs() {
        let repeated = classify_repeated_with(6, 7, 5, &mut get_rng(Some(5))).unwrap();

        let mut rng = get_rng(Some(5));
        let manual = (0..5)
            .map(|_| classify_grid(&generate(6, 7, &mut rng).unwrap()))
            .fold(Report::default(), |acc, r| acc + r);

        assert_eq!(repeated, manual);
        assert_eq!(repeated.runs(), 5);
        assert_eq!(repeated.total(), 5 * 6 * 7);
        for category in Category::ALL {
            let expected = manual.count(category) as f64 / (5 * 6 * 7) as f64 * 100.0;
            assert_eq!(repeated.percent(category), expected);
        }
    }

    #[test]
    fn test_repeated_rejects_bad_input() {
        assert!(matches!(
            classify_repeated(5, 5, 0, Some(1)),
            Err(MazeError::InvalidRunCount { runs: 0 })
        ));
        assert!(matches!(
            classify_repeated(1, 5, 3, Some(1)),
            Err(MazeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_display() {
        let report = Report {
            runs: 1,
            total: 4,
            dead_ends: 2,
            turns: 2,
            ..Report::default()
        };
        let text = report.to_string();
        assert!(text.starts_with("Complexity analysis (1 run)\n"));
        assert!(text.contains("  Total cells   : 4\n"));
        assert!(text.contains("  Dead ends     : 50.00%\n"));
        assert!(text.contains("  Crossroads    : 0.00%\n"));
    }
}
