pub mod doubling;
pub mod flood;
pub mod parity;

pub use doubling::{double_resolution, Cell, DoubledMap};
pub use flood::{count_interior, enclosed_cells, flood_exterior};
pub use parity::count_interior_by_parity;
