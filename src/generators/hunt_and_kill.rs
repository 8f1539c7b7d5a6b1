use std::sync::mpsc::SyncSender;

use crate::{
    generators::RandomSource,
    maze::{Coord, Direction, Grid, get_neighbors},
};

/// Carving state of the Hunt-and-Kill state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Random walk from the cursor through unvisited cells
    Walking,
    /// Row-major scan for the next unvisited cell bordering the carved region
    Hunting,
    /// Every cell has been visited
    Done,
}

/// Progress notifications for observers, e.g. a renderer animating the carve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarveEvent {
    /// A cell was marked visited and became the cursor
    Visit { coord: Coord },
    /// The wall between `from` and its neighbor in `direction` was removed
    Passage { from: Coord, direction: Direction },
    /// The walk got stuck and a hunt scan started
    HuntStart,
    /// The hunt found no target; the maze is complete
    Done,
}

/// Hunt-and-Kill carver. Holds the grid exclusively until carving finishes.
pub struct HuntAndKill<'a, R: RandomSource + ?Sized> {
    grid: &'a mut Grid,
    rng: &'a mut R,
    cursor: Coord,
    phase: Phase,
    /// Rows above this one are fully visited and skipped by the hunt scan
    scan_from_row: u16,
    events: Option<SyncSender<CarveEvent>>,
}

impl<'a, R: RandomSource + ?Sized> HuntAndKill<'a, R> {
    /// Starts carving at the top-left cell, which is marked visited.
    pub fn new(grid: &'a mut Grid, rng: &'a mut R) -> Self {
        let mut carver = HuntAndKill {
            grid,
            rng,
            cursor: (0, 0),
            phase: Phase::Walking,
            scan_from_row: 0,
            events: None,
        };
        carver.visit((0, 0));
        carver
    }

    /// Streams carve events to `sender`. A dropped receiver does not stop carving.
    pub fn with_events(mut self, sender: SyncSender<CarveEvent>) -> Self {
        // The start cell was visited before anyone was listening
        let _ = sender.send(CarveEvent::Visit {
            coord: self.cursor,
        });
        self.events = Some(sender);
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Runs both phases until every cell is visited.
    pub fn run(mut self) {
        while self.step() != Phase::Done {}
        tracing::debug!(
            "[hunt-and-kill] carved {}x{} grid",
            self.grid.rows(),
            self.grid.columns()
        );
    }

    /// Runs the current phase to completion and returns the next phase.
    pub fn step(&mut self) -> Phase {
        let next = match self.phase {
            Phase::Walking => self.walk(),
            Phase::Hunting => self.hunt(),
            Phase::Done => Phase::Done,
        };
        if next != self.phase {
            tracing::debug!(
                "[hunt-and-kill] {:?} -> {:?} at {:?}",
                self.phase,
                next,
                self.cursor
            );
        }
        self.phase = next;
        self.phase
    }

    fn emit(&self, event: CarveEvent) {
        if let Some(sender) = &self.events {
            let _ = sender.send(event);
        }
    }

    fn visit(&mut self, coord: Coord) {
        self.grid.mark_visited(coord);
        self.cursor = coord;
        self.emit(CarveEvent::Visit { coord });
    }

    fn carve(&mut self, from: Coord, direction: Direction) -> Coord {
        let to = self.grid.open_passage(from, direction);
        tracing::trace!("[hunt-and-kill] passage {:?} -> {:?}", from, to);
        self.emit(CarveEvent::Passage { from, direction });
        to
    }

    fn has_neighbor(&self, coord: Coord, visited: bool) -> bool {
        get_neighbors(coord, self.grid).any(|(_, n)| self.grid[n].is_visited() == visited)
    }

    /// Draws directions until one points at an in-bounds neighbor whose visited
    /// flag equals `visited`. Rejected draws change nothing.
    fn draw_direction(&mut self, coord: Coord, visited: bool) -> Direction {
        assert!(
            self.has_neighbor(coord, visited),
            "No neighbor of {coord:?} with visited={visited} to draw towards"
        );
        loop {
            let direction = self.rng.next_direction();
            match self.grid.neighbor(coord, direction) {
                Some(next) if self.grid[next].is_visited() == visited => return direction,
                _ => continue,
            }
        }
    }

    fn walk(&mut self) -> Phase {
        while self.has_neighbor(self.cursor, false) {
            let direction = self.draw_direction(self.cursor, false);
            let next = self.carve(self.cursor, direction);
            self.visit(next);
        }
        Phase::Hunting
    }

    fn hunt(&mut self) -> Phase {
        self.emit(CarveEvent::HuntStart);
        let Some(target) = self.find_hunt_target() else {
            self.emit(CarveEvent::Done);
            return Phase::Done;
        };
        assert!(
            !self.grid[target].is_visited(),
            "Hunt selected already visited cell {target:?}"
        );
        tracing::debug!("[hunt-and-kill] hunt resumed at {:?}", target);

        self.visit(target);
        let direction = self.draw_direction(target, true);
        self.carve(target, direction);
        Phase::Walking
    }

    /// First unvisited cell in row-major order with at least one visited neighbor.
    fn find_hunt_target(&mut self) -> Option<Coord> {
        let mut rows_complete = true;
        for row in self.scan_from_row..self.grid.rows() {
            let mut row_complete = true;
            for col in 0..self.grid.columns() {
                let coord = (row, col);
                if self.grid[coord].is_visited() {
                    continue;
                }
                row_complete = false;
                if self.has_neighbor(coord, true) {
                    return Some(coord);
                }
            }
            rows_complete &= row_complete;
            if rows_complete {
                self.scan_from_row = row + 1;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;
    use std::sync::mpsc::sync_channel;

    /// Replays a fixed direction sequence, cycling when exhausted.
    struct ScriptedSource {
        script: Vec<Direction>,
        next: usize,
    }

    impl ScriptedSource {
        fn new(script: &[Direction]) -> Self {
            ScriptedSource {
                script: script.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for ScriptedSource {
        fn next_direction(&mut self) -> Direction {
            let direction = self.script[self.next % self.script.len()];
            self.next += 1;
            direction
        }
    }

    use Direction::{Down, Left, Right, Up};

    #[test]
    fn test_walk_without_hunt() {
        let mut grid = Grid::new(2, 2).unwrap();
        let mut rng = ScriptedSource::new(&[Down, Right, Up, Left]);
        HuntAndKill::new(&mut grid, &mut rng).run();

        assert!(grid.is_fully_visited());
        assert_eq!(grid.passage_count(), 3);
        assert!(grid[(0, 0)].is_open(Down));
        assert!(grid[(1, 0)].is_open(Right));
        assert!(grid[(1, 1)].is_open(Up));
        // The pair never carved keeps both walls
        assert!(grid[(0, 0)].has_wall(Right));
        assert!(grid[(0, 1)].has_wall(Left));
    }

    #[test]
    fn test_phases_and_hunt_tie_break() {
        let mut grid = Grid::new(2, 3).unwrap();
        // Walk (0,0) -> (0,1) -> (1,1) -> (1,0) gets stuck; the hunt must pick
        // (0,2) ahead of (1,2) and connect it left after rejecting down.
        let mut rng = ScriptedSource::new(&[Right, Down, Left, Down, Left, Down]);
        let mut carver = HuntAndKill::new(&mut grid, &mut rng);
        assert_eq!(carver.phase(), Phase::Walking);
        assert_eq!(carver.cursor(), (0, 0));

        assert_eq!(carver.step(), Phase::Hunting);
        assert_eq!(carver.cursor(), (1, 0));

        assert_eq!(carver.step(), Phase::Walking);
        assert_eq!(carver.cursor(), (0, 2));

        assert_eq!(carver.step(), Phase::Hunting);
        assert_eq!(carver.cursor(), (1, 2));

        assert_eq!(carver.step(), Phase::Done);
        assert_eq!(carver.step(), Phase::Done);

        assert!(grid.is_fully_visited());
        assert_eq!(grid.passage_count(), 5);
        assert!(grid[(0, 2)].is_open(Left));
        assert!(grid[(0, 1)].is_open(Right));
        assert!(grid[(0, 2)].is_open(Down));
        assert!(grid[(1, 2)].has_wall(Left));
        assert!(grid[(1, 1)].has_wall(Right));
    }

    #[test]
    fn test_events_follow_carving() {
        let mut grid = Grid::new(2, 3).unwrap();
        let mut rng = ScriptedSource::new(&[Right, Down, Left, Down, Left, Down]);
        let (tx, rx) = sync_channel(64);
        HuntAndKill::new(&mut grid, &mut rng).with_events(tx).run();

        let events = rx.try_iter().collect::<Vec<_>>();
        assert_eq!(events.first(), Some(&CarveEvent::Visit { coord: (0, 0) }));
        assert_eq!(events.last(), Some(&CarveEvent::Done));
        let visits = events
            .iter()
            .filter(|e| matches!(e, CarveEvent::Visit { .. }))
            .count();
        let passages = events
            .iter()
            .filter(|e| matches!(e, CarveEvent::Passage { .. }))
            .count();
        let hunts = events
            .iter()
            .filter(|e| matches!(e, CarveEvent::HuntStart))
            .count();
        assert_eq!((visits, passages, hunts), (6, 5, 2));
        assert!(events.contains(&CarveEvent::Passage {
            from: (0, 2),
            direction: Left
        }));
    }

    #[test]
    fn test_dropped_receiver_does_not_stop_carving() {
        let mut grid = Grid::new(4, 4).unwrap();
        let mut rng = get_rng(Some(9));
        let (tx, rx) = sync_channel(1);
        drop(rx);
        HuntAndKill::new(&mut grid, &mut rng).with_events(tx).run();
        assert!(grid.is_fully_visited());
    }

    #[test]
    fn test_random_carving_visits_everything() {
        for seed in 0..20 {
            let mut grid = Grid::new(7, 5).unwrap();
            let mut rng = get_rng(Some(seed));
            HuntAndKill::new(&mut grid, &mut rng).run();
            assert!(grid.is_fully_visited());
            assert_eq!(grid.passage_count(), 7 * 5 - 1);
        }
    }
}
