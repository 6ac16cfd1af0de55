// Pipe grid reading: text rows → rectangular tile matrix.

use std::path::Path;

use anyhow::Context;

use crate::core::{PipeError, Pos, Result, Tile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Tile>>,
    width: usize,
    start: Option<Pos>,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.rows.get(pos.y).and_then(|row| row.get(pos.x)).copied()
    }

    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }
}

/// Parse one grid from text. Trailing blank lines are ignored; every other
/// line must have the same number of cells.
pub fn parse_grid(text: &str) -> Result<Grid> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }
    if lines.is_empty() { return Err(PipeError::EmptyGrid); }

    let width = lines[0].chars().count();
    let mut rows = Vec::with_capacity(lines.len());
    let mut start: Option<Pos> = None;

    for (y, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(width);
        for (x, c) in line.chars().enumerate() {
            let tile = Tile::from_glyph(c).ok_or(PipeError::InvalidGlyph {
                line: y + 1,
                column: x + 1,
                glyph: c,
            })?;
            if tile == Tile::Start {
                let here = Pos::new(x, y);
                if let Some(first) = start {
                    return Err(PipeError::MultipleStarts(first, here));
                }
                start = Some(here);
            }
            row.push(tile);
        }
        if row.len() != width {
            return Err(PipeError::RaggedRow { line: y + 1, expected: width, found: row.len() });
        }
        rows.push(row);
    }

    log::debug!("parsed {}x{} grid, start at {:?}", width, rows.len(), start);
    Ok(Grid { rows, width, start })
}

pub fn load_grid(path: impl AsRef<Path>) -> anyhow::Result<Grid> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let grid = parse_grid(&content).with_context(|| format!("cannot parse {}", path.display()))?;
    Ok(grid)
}

pub fn grid_to_string(grid: &Grid) -> String {
    grid.rows
        .iter()
        .map(|row| row.iter().map(|t| t.glyph()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
