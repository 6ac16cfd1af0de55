use serde::{Deserialize, Serialize};

use crate::core::{Pipe, Pos, Result};
use crate::enclosure::enclosed_cells;
use crate::perception::{parse_grid, Grid};
use crate::traversal::trace_loop;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleResult {
    pub start: Pos,
    pub start_pipe: Pipe,
    pub loop_len: usize,
    pub half_length: usize,
    pub enclosed: usize,
}

pub fn solve(grid: &Grid) -> Result<PuzzleResult> {
    let trace = trace_loop(grid)?;
    let enclosed = enclosed_cells(&trace.map);
    Ok(PuzzleResult {
        start: trace.start,
        start_pipe: trace.start_pipe,
        loop_len: trace.loop_len(),
        half_length: trace.half_length,
        enclosed,
    })
}

pub fn solve_str(text: &str) -> Result<PuzzleResult> {
    solve(&parse_grid(text)?)
}
