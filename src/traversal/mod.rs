pub mod start;
pub mod tracer;

pub use start::{infer_start, StartShape};
pub use tracer::{trace_loop, LoopMap, LoopTrace};
