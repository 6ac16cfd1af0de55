// Loop tracing: level-synchronised BFS out of the two start seeds.
//
// Both fronts advance one pipe per round along the loop until they meet, so the
// number of rounds is the distance from start to the farthest loop cell.

use std::fmt;

use crate::core::{Pipe, PipeError, Pos, Result, Tile};
use crate::perception::Grid;

use super::start::infer_start;

/// Loop-only view of a grid: every cell is either its resolved pipe or
/// unvisited (`None`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopMap {
    cells: Vec<Vec<Option<Pipe>>>,
    width: usize,
}

impl LoopMap {
    pub fn new(width: usize, height: usize) -> Self {
        Self { cells: vec![vec![None; width]; height], width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, pos: Pos) -> Option<Pipe> {
        self.cells.get(pos.y).and_then(|row| row.get(pos.x)).copied().flatten()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.get(pos).is_some()
    }

    pub fn rows(&self) -> &[Vec<Option<Pipe>>] {
        &self.cells
    }

    /// Number of cells on the loop.
    pub fn len(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn mark(&mut self, pos: Pos, pipe: Pipe) {
        self.cells[pos.y][pos.x] = Some(pipe);
    }
}

impl fmt::Display for LoopMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.map_or('.', Pipe::glyph))?;
            }
        }
        Ok(())
    }
}

/// Current and next BFS levels plus the round counter. The counter starts at
/// 1 because the seeds already sit one step away from start.
#[derive(Debug)]
struct Frontier {
    current: Vec<Pos>,
    next: Vec<Pos>,
    round: usize,
}

impl Frontier {
    fn seeded(seeds: Vec<Pos>) -> Self {
        Self { current: seeds, next: Vec::new(), round: 1 }
    }

    fn pop(&mut self) -> Option<Pos> {
        self.current.pop()
    }

    fn push(&mut self, pos: Pos) {
        self.next.push(pos);
    }

    /// Swap in the next level. Returns false once there is nothing left.
    fn promote(&mut self) -> bool {
        self.current = std::mem::take(&mut self.next);
        self.round += 1;
        !self.current.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct LoopTrace {
    pub map: LoopMap,
    pub start: Pos,
    pub start_pipe: Pipe,
    pub half_length: usize,
}

impl LoopTrace {
    pub fn loop_len(&self) -> usize {
        self.map.len()
    }
}

pub fn trace_loop(grid: &Grid) -> Result<LoopTrace> {
    let start = grid.start().ok_or(PipeError::MissingStart)?;
    let shape = infer_start(grid, start)?;

    let (width, height) = (grid.width(), grid.height());
    let mut map = LoopMap::new(width, height);
    map.mark(start, shape.pipe);

    let mut frontier = Frontier::seeded(shape.seeds);
    loop {
        while let Some(pos) = frontier.pop() {
            let pipe = grid.get(pos).and_then(Tile::pipe).ok_or(PipeError::BrokenLoop(pos))?;
            map.mark(pos, pipe);
            for dir in pipe.openings() {
                let next = dir.step(pos, width, height).ok_or(PipeError::BrokenLoop(pos))?;
                if !map.contains(next) {
                    frontier.push(next);
                }
            }
        }
        if !frontier.promote() { break; }
    }

    let half_length = frontier.round - 1;
    log::info!("loop through {} traced: {} cells, farthest point {} steps away", start, map.len(), half_length);
    Ok(LoopTrace { map, start, start_pipe: shape.pipe, half_length })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perception::parse_grid;

    fn trace(text: &str) -> LoopTrace {
        trace_loop(&parse_grid(text).unwrap()).unwrap()
    }

    #[test]
    fn three_by_three_ring() {
        let t = trace(".....\n.S-7.\n.|.|.\n.L-J.\n.....");
        assert_eq!(t.half_length, 4);
        assert_eq!(t.loop_len(), 8);
        assert_eq!(t.start_pipe, Pipe::SouthEast);
        assert_eq!(t.map.get(Pos::new(1, 1)), Some(Pipe::SouthEast));
    }

    #[test]
    fn rectangle_half_length_is_half_the_perimeter() {
        let t = trace("F----7\n|....|\nS....|\nL----J");
        assert_eq!(t.loop_len(), 16);
        assert_eq!(t.half_length, 8);
    }

    #[test]
    fn tight_loop_on_the_grid_corner() {
        let t = trace("S7\nLJ");
        assert_eq!(t.half_length, 2);
        assert_eq!(t.loop_len(), 4);
    }

    #[test]
    fn complex_loop_ignores_stray_pipes() {
        let t = trace("7-F7-\n.FJ|7\nSJLL7\n|F--J\nLJ.LJ");
        assert_eq!(t.half_length, 8);
        assert_eq!(t.loop_len(), 16);
        assert_eq!(t.start_pipe, Pipe::SouthEast);
        // stray pipes off the loop stay unvisited
        assert!(!t.map.contains(Pos::new(0, 0)));
        assert!(!t.map.contains(Pos::new(4, 1)));
        assert_eq!(t.map.to_string(), "..F7.\n.FJ|.\nFJ.L7\n|F--J\nLJ...");
    }

    #[test]
    fn missing_start_is_an_error() {
        let grid = parse_grid("F7\nLJ").unwrap();
        assert_eq!(trace_loop(&grid).unwrap_err(), PipeError::MissingStart);
    }

    #[test]
    fn dead_end_breaks_the_loop() {
        let grid = parse_grid(".....\n.S-7.\n.|...\n.L-J.\n.....").unwrap();
        assert!(matches!(trace_loop(&grid).unwrap_err(), PipeError::BrokenLoop(_)));
    }

    #[test]
    fn pipe_running_off_the_grid_breaks_the_loop() {
        let grid = parse_grid("S-\n|.").unwrap();
        assert!(matches!(trace_loop(&grid).unwrap_err(), PipeError::BrokenLoop(_)));
    }
}
