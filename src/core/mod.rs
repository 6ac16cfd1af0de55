pub mod error;
pub mod types;

pub use error::{PipeError, Result};
pub use types::{Direction, DirectionSet, Pipe, Pos, Tile};
