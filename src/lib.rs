mod core;
mod geometries;
mod noise;
mod shapes;
mod wgpual;

pub use core::*;
pub use geometries::*;
pub use noise::*;
pub use shapes::*;
pub use wgpual::*;
