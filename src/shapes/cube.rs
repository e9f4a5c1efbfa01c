use glam::Vec3;

use crate::{
    geometries::{emit_tile, MeshBuffer, NormalMode, Tile, VertexLayout},
    noise::NoiseField,
};

/// Number of triangles [`generate`] emits, saturating at `usize::MAX`.
pub fn triangle_count(subdivisions: u32) -> usize {
    let n = subdivisions as usize;

    n.saturating_mul(n).saturating_mul(2)
}

/// A unit square over `[-0.5, 0.5]²` split into `subdivisions`² tiles. Each
/// corner is lifted along +Z by the fractal height of its `(x, y)` position.
pub fn generate(noise: &NoiseField, subdivisions: u32) -> MeshBuffer {
    let mut buffer = MeshBuffer::with_triangle_capacity(
        VertexLayout::PositionNormal,
        triangle_count(subdivisions),
    );
    let side = 1.0 / subdivisions as f32;
    let lift = |x: f32, y: f32| Vec3::new(x, y, noise.height(x, y));

    for column in 0..subdivisions {
        let left = -0.5 + column as f32 * side;
        let right = left + side;

        for row in 0..subdivisions {
            let bottom = -0.5 + row as f32 * side;
            let top = bottom + side;

            let tile = Tile::new(
                lift(left, top),
                lift(right, top),
                lift(left, bottom),
                lift(right, bottom),
            );
            emit_tile(&mut buffer, &tile, NormalMode::FaceDerived);
        }
    }

    buffer
}
