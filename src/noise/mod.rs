//! Gradient noise used to displace terrain grids.

mod field;
mod lookup;

pub use field::*;
pub use lookup::*;
