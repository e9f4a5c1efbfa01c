//! Vertex buffers and the tessellation primitives that fill them.

mod geometry;
mod mesh_buffer;
pub mod tessellator;
mod vertex;

pub use geometry::*;
pub use mesh_buffer::*;
pub use tessellator::{emit_tile, emit_triangle, NormalMode, Tile};
pub use vertex::*;
