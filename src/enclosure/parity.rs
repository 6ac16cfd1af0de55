// Scan-line crossing parity. Independent of the flood fill; used to cross-check it.

use crate::core::Direction;
use crate::traversal::LoopMap;

/// Walk each row left to right, flipping inside/outside on every loop cell
/// that reaches north (`|`, `L`, `J`), and count the non-loop cells passed
/// while inside.
pub fn count_interior_by_parity(map: &LoopMap) -> usize {
    let mut count = 0;
    for row in map.rows() {
        let mut inside = false;
        for cell in row {
            match cell {
                Some(pipe) if pipe.opens(Direction::North) => inside = !inside,
                Some(_) => {}
                None if inside => count += 1,
                None => {}
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enclosure::enclosed_cells;
    use crate::perception::parse_grid;
    use crate::traversal::trace_loop;

    fn loop_map(text: &str) -> LoopMap {
        trace_loop(&parse_grid(text).unwrap()).unwrap().map
    }

    #[test]
    fn rectangle_interior() {
        assert_eq!(count_interior_by_parity(&loop_map("F----7\n|....|\nS....|\nL----J")), 8);
    }

    #[test]
    fn horizontal_runs_do_not_flip() {
        assert_eq!(count_interior_by_parity(&loop_map("......\n.S--7.\n.L--J.\n......")), 0);
    }

    #[test]
    fn agrees_with_flood_fill() {
        for text in [
            ".....\n.S-7.\n.|.|.\n.L-J.\n.....",
            "7-F7-\n.FJ|7\nSJLL7\n|F--J\nLJ.LJ",
            "F7F7\n||||\n|LJ|\nS--J",
            "..........\n.S------7.\n.|F----7|.\n.||....||.\n.||....||.\n.|L-7F-J|.\n.|..||..|.\n.L--JL--J.\n..........",
        ] {
            let map = loop_map(text);
            assert_eq!(count_interior_by_parity(&map), enclosed_cells(&map), "{}", text);
        }
    }
}
