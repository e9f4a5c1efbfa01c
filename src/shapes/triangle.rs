use glam::Vec3;

use crate::geometries::{emit_triangle, MeshBuffer, VertexLayout};

pub const TRIANGLE_COUNT: usize = 1;

/// A single flat-shaded triangle in the XY plane facing +Z, spanning the top
/// left, bottom left and bottom right corners of the unit square.
pub fn generate() -> MeshBuffer {
    let mut buffer = MeshBuffer::with_triangle_capacity(VertexLayout::PositionNormal, TRIANGLE_COUNT);

    emit_triangle(
        &mut buffer,
        [
            Vec3::new(-0.5, 0.5, 0.0),
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
        ],
        [Vec3::Z; 3],
    );

    buffer
}
