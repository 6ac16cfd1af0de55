use crate::core::{Direction, Pos};
use crate::traversal::LoopMap;

use super::doubling::{double_resolution, Cell, DoubledMap};

/// Mark every empty cell reachable from the top-left corner as outside.
/// Pipe cells are walls; the fill never wraps around the edges.
pub fn flood_exterior(map: &mut DoubledMap) {
    let origin = Pos::new(0, 0);
    if map.get(origin) != Some(Cell::Empty) { return; }

    let (width, height) = (map.width(), map.height());
    let mut stack = vec![origin];
    map.set(origin, Cell::Outside);

    while let Some(pos) = stack.pop() {
        for dir in Direction::ALL {
            let Some(next) = dir.step(pos, width, height) else { continue };
            if map.get(next) == Some(Cell::Empty) {
                map.set(next, Cell::Outside);
                stack.push(next);
            }
        }
    }
}

/// Original cells neither on the loop nor reached by the exterior fill.
pub fn count_interior(map: &DoubledMap) -> usize {
    map.originals().filter(|&c| c == Cell::Empty).count()
}

pub fn enclosed_cells(map: &LoopMap) -> usize {
    let mut doubled = double_resolution(map);
    flood_exterior(&mut doubled);
    let inside = count_interior(&doubled);
    log::debug!("flood fill over {}x{} doubled map leaves {} cells inside", doubled.width(), doubled.height(), inside);
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perception::parse_grid;
    use crate::traversal::trace_loop;

    fn loop_map(text: &str) -> LoopMap {
        trace_loop(&parse_grid(text).unwrap()).unwrap().map
    }

    const OPEN_GAP: &str = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........";

    const SQUEEZE: &str = "\
..........
.S------7.
.|F----7|.
.||....||.
.||....||.
.|L-7F-J|.
.|..||..|.
.L--JL--J.
..........";

    const SCATTERED: &str = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...";

    #[test]
    fn single_enclosed_cell() {
        assert_eq!(enclosed_cells(&loop_map(".....\n.S-7.\n.|.|.\n.L-J.\n.....")), 1);
    }

    #[test]
    fn corridor_loop_encloses_nothing() {
        assert_eq!(enclosed_cells(&loop_map("S7\nLJ")), 0);
        assert_eq!(enclosed_cells(&loop_map("......\n.S--7.\n.L--J.\n......")), 0);
    }

    #[test]
    fn open_gap_lets_the_outside_in() {
        assert_eq!(enclosed_cells(&loop_map(OPEN_GAP)), 4);
    }

    #[test]
    fn squeeze_between_touching_pipes() {
        assert_eq!(enclosed_cells(&loop_map(SQUEEZE)), 4);
    }

    #[test]
    fn scattered_interior() {
        assert_eq!(enclosed_cells(&loop_map(SCATTERED)), 8);
    }

    #[test]
    fn stray_ground_inside_counts() {
        assert_eq!(enclosed_cells(&loop_map("7-F7-\n.FJ|7\nSJLL7\n|F--J\nLJ.LJ")), 1);
    }

    #[test]
    fn loop_cells_are_never_marked_outside() {
        for text in [OPEN_GAP, SQUEEZE, SCATTERED] {
            let map = loop_map(text);
            let mut doubled = double_resolution(&map);
            flood_exterior(&mut doubled);
            for y in 0..map.height() {
                for x in 0..map.width() {
                    let pos = Pos::new(x, y);
                    if let Some(pipe) = map.get(pos) {
                        assert_eq!(doubled.original(pos), Some(Cell::Pipe(pipe)), "at {}", pos);
                    }
                }
            }
        }
    }

    #[test]
    fn flood_marks_the_border() {
        let mut doubled = double_resolution(&loop_map("S7\nLJ"));
        flood_exterior(&mut doubled);
        assert_eq!(doubled.to_string(), "OOOO\nF-7O\n|.|O\nL-JO\nOOOO");
    }
}
