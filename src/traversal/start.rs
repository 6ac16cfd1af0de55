// Start-shape inference.
//
// The start marker hides its pipe. A neighbour connects into start when its own
// pipe opens back toward it; the two connecting directions name the shape.

use crate::core::{Direction, DirectionSet, Pipe, PipeError, Pos, Result};
use crate::perception::Grid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartShape {
    pub pipe: Pipe,
    /// Connecting neighbours, in west/east/north/south order.
    pub seeds: Vec<Pos>,
}

/// Directions out of `start` whose neighbour pipes connect back into it.
pub fn connecting_directions(grid: &Grid, start: Pos) -> Vec<(Direction, Pos)> {
    Direction::ALL
        .into_iter()
        .filter_map(|dir| {
            let next = dir.step(start, grid.width(), grid.height())?;
            let pipe = grid.get(next)?.pipe()?;
            pipe.opens(dir.opposite()).then_some((dir, next))
        })
        .collect()
}

pub fn infer_start(grid: &Grid, start: Pos) -> Result<StartShape> {
    let connecting = connecting_directions(grid, start);
    let open: DirectionSet = connecting.iter().map(|&(dir, _)| dir).collect();
    let pipe = Pipe::from_openings(open).ok_or(PipeError::AmbiguousStart(connecting.len()))?;
    log::debug!("start {} resolves to {}", start, pipe);
    Ok(StartShape {
        pipe,
        seeds: connecting.into_iter().map(|(_, pos)| pos).collect(),
    })
}
