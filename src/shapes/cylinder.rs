use std::f32::consts::TAU;

use glam::Vec3;

use super::cone::{emit_cap_wedge, rim};
use crate::geometries::{emit_tile, MeshBuffer, NormalMode, Tile, VertexLayout};

const HALF_HEIGHT: f32 = 0.5;

pub fn triangle_count(bands: u32, slices: u32) -> usize {
    let bands = bands as usize;
    let cap = bands.saturating_mul(2).saturating_sub(1);

    // Two caps of `2 * bands - 1` triangles each plus `bands` wall tiles.
    let per_slice = cap.saturating_mul(2).saturating_add(bands.saturating_mul(2));
    (slices as usize).saturating_mul(per_slice)
}

/// A cylinder of height 1 and radius 0.5 centered on the origin.
///
/// Each of the `slices` wedges gets a fan-tessellated wedge on both caps and
/// a wall of `bands` tiles stacked from the bottom cap to the top cap.
pub fn generate(bands: u32, slices: u32) -> MeshBuffer {
    let mut buffer = MeshBuffer::with_triangle_capacity(
        VertexLayout::PositionNormal,
        triangle_count(bands, slices),
    );
    let slice_angle = TAU / slices as f32;
    let band_height = 1.0 / bands as f32;

    for slice in 0..slices {
        let left_angle = slice as f32 * slice_angle;
        let right_angle = (slice + 1) as f32 * slice_angle;

        emit_cap_wedge(
            &mut buffer,
            rim(left_angle, -HALF_HEIGHT),
            rim(right_angle, -HALF_HEIGHT),
            bands,
            false,
        );
        emit_cap_wedge(
            &mut buffer,
            rim(left_angle, HALF_HEIGHT),
            rim(right_angle, HALF_HEIGHT),
            bands,
            true,
        );

        for band in 0..bands {
            let lower = -HALF_HEIGHT + band as f32 * band_height;
            let upper = -HALF_HEIGHT + (band + 1) as f32 * band_height;

            // Rows are emitted bottom-up, so the tile's "top" edge is the
            // lower one.
            let tile = Tile::new(
                rim(left_angle, lower),
                rim(right_angle, lower),
                rim(left_angle, upper),
                rim(right_angle, upper),
            );
            emit_tile(&mut buffer, &tile, NormalMode::Analytic);
        }
    }

    buffer
}
