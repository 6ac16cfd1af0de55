pub mod core;
pub mod perception;
pub mod traversal;
pub mod enclosure;
pub mod solver;
