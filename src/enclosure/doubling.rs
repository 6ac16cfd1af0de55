// Resolution doubling.
//
// Two loop cells that touch without being joined leave no room for a flood
// fill to pass between them. Doubling the grid inserts a connector cell between
// every pair of neighbours; it carries a pipe only where the loop really joins
// the pair, so the gap opens up everywhere else.
//
// Layout: row 0 is an all-empty border, original row y sits at row 2y + 1 with
// its connector row at 2y + 2, and original column x sits at column 2x.

use std::fmt;

use crate::core::{Direction, Pipe, Pos};
use crate::traversal::LoopMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Pipe(Pipe),
    Outside,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Pipe(p) => p.glyph(),
            Cell::Outside => 'O',
        }
    }
}

impl From<Option<Pipe>> for Cell {
    fn from(cell: Option<Pipe>) -> Self {
        cell.map_or(Cell::Empty, Cell::Pipe)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubledMap {
    cells: Vec<Vec<Cell>>,
    width: usize,
}

impl DoubledMap {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.cells.get(pos.y).and_then(|row| row.get(pos.x)).copied()
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.y][pos.x] = cell;
    }

    /// Doubled coordinate of an original-resolution cell.
    pub fn scale(pos: Pos) -> Pos {
        Pos::new(2 * pos.x, 2 * pos.y + 1)
    }

    /// The cell standing for original position `pos`.
    pub fn original(&self, pos: Pos) -> Option<Cell> {
        self.get(Self::scale(pos))
    }

    /// Original-resolution cells, row by row.
    pub fn originals(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().skip(1).step_by(2).flat_map(|row| row.iter().step_by(2).copied())
    }
}

impl fmt::Display for DoubledMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}

fn opens(cell: Option<Pipe>, dir: Direction) -> bool {
    cell.is_some_and(|p| p.opens(dir))
}

pub fn double_resolution(map: &LoopMap) -> DoubledMap {
    let width = map.width() * 2;
    let mut cells = Vec::with_capacity(map.height() * 2 + 1);
    cells.push(vec![Cell::Empty; width]);

    for row in map.rows() {
        let mut real = Vec::with_capacity(width);
        let mut connector = Vec::with_capacity(width);
        for &cell in row {
            real.push(Cell::from(cell));
            real.push(if opens(cell, Direction::East) { Cell::Pipe(Pipe::Horizontal) } else { Cell::Empty });
            connector.push(if opens(cell, Direction::South) { Cell::Pipe(Pipe::Vertical) } else { Cell::Empty });
            connector.push(Cell::Empty);
        }
        cells.push(real);
        cells.push(connector);
    }

    DoubledMap { cells, width }
}
