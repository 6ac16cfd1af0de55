pub mod puzzle;
pub mod runner;

pub use puzzle::{solve, solve_str, PuzzleResult};
pub use runner::{run_batch, BatchReport, PuzzleReport};
