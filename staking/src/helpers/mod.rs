pub mod lending;
pub mod math;
pub mod swaps;

pub use math::YieldMathModule;
