use std::{
    fmt,
    io::{self, Write},
    sync::mpsc::Receiver,
    time::Duration,
};

use crossterm::{
    QueueableCommand, cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::{
    generators::CarveEvent,
    maze::{Coord, Direction, Grid},
};

/// One character cell of the rendered maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Wall,
    Path,
    /// Cell interior not reached by the carver yet
    Unvisited,
    /// Current carving cursor
    Cursor,
    Entrance,
    Exit,
}

impl Glyph {
    /// The width of each glyph when rendered, in character widths.
    pub const WIDTH: u16 = 2;
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Glyph::Wall => "⬜".with(Color::White),
            Glyph::Path => "  ".with(Color::Reset),
            Glyph::Unvisited => "··".with(Color::DarkGrey),
            Glyph::Cursor => "🟨".with(Color::Yellow),
            Glyph::Entrance => "🟩".with(Color::Green),
            Glyph::Exit => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Glyph::WIDTH as usize,
                "Each glyph must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Character lattice for a maze of `rows x columns` cells.
/// n cells in each dimension -> n + 1 wall lines -> 2n + 1 glyphs. Cell centers
/// sit at odd positions, the walls between them at even ones.
pub struct Lattice {
    glyphs: Box<[Glyph]>,
    width: usize,
    height: usize,
}

impl Lattice {
    /// All walls, every cell interior unvisited.
    pub fn blank(rows: u16, columns: u16) -> Self {
        let (width, height) = Self::dimensions(rows, columns);
        let mut lattice = Lattice {
            glyphs: vec![Glyph::Wall; width * height].into_boxed_slice(),
            width,
            height,
        };
        for row in 0..rows {
            for col in 0..columns {
                lattice.set(Self::center((row, col)), Glyph::Unvisited);
            }
        }
        lattice
    }

    /// Lattice of a carved grid, including its entrance and exit openings.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut lattice = Lattice::blank(grid.rows(), grid.columns());
        for (coord, cell) in grid.cells() {
            if cell.is_visited() {
                lattice.set(Self::center(coord), Glyph::Path);
            }
            for direction in Direction::ALL.into_iter().filter(|&d| cell.is_open(d)) {
                let glyph = match (coord, direction) {
                    (c, Direction::Left) if c == grid.entrance() => Glyph::Entrance,
                    (c, Direction::Right) if c == grid.exit() => Glyph::Exit,
                    _ => Glyph::Path,
                };
                lattice.set(Self::wall(coord, direction), glyph);
            }
        }
        lattice
    }

    /// Lattice (width, height) in glyphs for a maze of `rows x columns` cells.
    pub fn dimensions(rows: u16, columns: u16) -> (usize, usize) {
        (columns as usize * 2 + 1, rows as usize * 2 + 1)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Lattice position (row, column) of a cell's interior.
    pub fn center((row, col): Coord) -> (usize, usize) {
        (row as usize * 2 + 1, col as usize * 2 + 1)
    }

    /// Lattice position of the wall on the `direction` side of a cell.
    pub fn wall(coord: Coord, direction: Direction) -> (usize, usize) {
        let (row, col) = Self::center(coord);
        match direction {
            Direction::Up => (row - 1, col),
            Direction::Down => (row + 1, col),
            Direction::Left => (row, col - 1),
            Direction::Right => (row, col + 1),
        }
    }

    pub fn get(&self, (row, col): (usize, usize)) -> Glyph {
        self.glyphs[row * self.width + col]
    }

    fn set(&mut self, (row, col): (usize, usize), glyph: Glyph) {
        self.glyphs[row * self.width + col] = glyph;
    }

    /// Applies a carve event and returns the positions whose glyph changed.
    /// `carve_cursor` tracks the highlighted cell between calls.
    pub fn apply(
        &mut self,
        event: &CarveEvent,
        carve_cursor: &mut Option<Coord>,
    ) -> Vec<(usize, usize)> {
        let mut changed = Vec::new();
        match *event {
            CarveEvent::Visit { coord } => {
                if let Some(previous) = carve_cursor.replace(coord) {
                    self.set(Self::center(previous), Glyph::Path);
                    changed.push(Self::center(previous));
                }
                self.set(Self::center(coord), Glyph::Cursor);
                changed.push(Self::center(coord));
            }
            CarveEvent::Passage { from, direction } => {
                self.set(Self::wall(from, direction), Glyph::Path);
                changed.push(Self::wall(from, direction));
            }
            CarveEvent::HuntStart => {}
            CarveEvent::Done => {
                if let Some(previous) = carve_cursor.take() {
                    self.set(Self::center(previous), Glyph::Path);
                    changed.push(Self::center(previous));
                }
            }
        }
        changed
    }

    /// Checks if the terminal is large enough to show the lattice of a
    /// `rows x columns` maze, without building it.
    /// An unknown terminal size (output redirected to a file) always fits.
    pub fn fits_terminal(rows: u16, columns: u16) -> bool {
        let (width, height) = Self::dimensions(rows, columns);
        match terminal::size() {
            Ok((term_width, term_height)) => {
                width <= (term_width / Glyph::WIDTH) as usize && height < term_height as usize
            }
            Err(_) => true,
        }
    }
}

/// Prints the lattice row by row at the current cursor position.
pub fn draw<W: Write>(out: &mut W, lattice: &Lattice) -> io::Result<()> {
    for row in 0..lattice.height() {
        for col in 0..lattice.width() {
            out.queue(style::Print(lattice.get((row, col))))?;
        }
        out.queue(style::Print("\r\n"))?;
    }
    out.flush()
}

/// Prints a warning when the maze does not fit the terminal.
pub fn warn_too_small<W: Write>(out: &mut W, rows: u16, columns: u16) -> io::Result<()> {
    let (width, height) = Lattice::dimensions(rows, columns);
    let msg = format!(
        "Terminal is too small to display a {}x{} character maze, skipping rendering.\r\n",
        width * Glyph::WIDTH as usize,
        height
    );
    out.queue(style::PrintStyledContent(
        msg.with(Color::Yellow).attribute(Attribute::Bold),
    ))?;
    out.flush()
}

/// Replays carve events onto a blank lattice until the sender hangs up.
/// Each event is followed by `delay` so the carve is visible.
/// The cursor is shown again afterwards even if writing fails midway.
pub fn animate<W: Write>(
    out: &mut W,
    rows: u16,
    columns: u16,
    events: Receiver<CarveEvent>,
    delay: Duration,
) -> io::Result<Lattice> {
    let mut lattice = Lattice::blank(rows, columns);

    queue!(
        out,
        terminal::Clear(ClearType::All),
        cursor::Hide,
        cursor::MoveTo(0, 0)
    )?;
    let replayed = replay(out, &mut lattice, events, delay);

    let restored = queue!(
        out,
        cursor::MoveTo(0, lattice.height() as u16),
        cursor::Show
    )
    .and_then(|_| out.flush());
    replayed.and(restored)?;
    Ok(lattice)
}

fn replay<W: Write>(
    out: &mut W,
    lattice: &mut Lattice,
    events: Receiver<CarveEvent>,
    delay: Duration,
) -> io::Result<()> {
    let mut carve_cursor = None;
    draw(out, lattice)?;

    for event in events {
        for (row, col) in lattice.apply(&event, &mut carve_cursor) {
            queue!(
                out,
                cursor::MoveTo(col as u16 * Glyph::WIDTH, row as u16),
                style::Print(lattice.get((row, col)))
            )?;
        }
        out.flush()?;
        if matches!(event, CarveEvent::Passage { .. }) {
            std::thread::sleep(delay);
        }
    }
    Ok(())
}
