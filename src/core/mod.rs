//! Fight constants and the shared damage math.

pub mod combat_math;
pub mod constants;
