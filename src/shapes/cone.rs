use std::f32::consts::TAU;

use glam::Vec3;

use crate::geometries::{
    emit_tile, emit_triangle,
    tessellator::{analytic_normal, safe_normalize},
    MeshBuffer, NormalMode, Tile, VertexLayout,
};

/// Height of the apex above the origin. The base sits at `-APEX_HEIGHT`.
const APEX_HEIGHT: f32 = 0.5;
const RADIUS: f32 = 0.5;

/// Number of triangles [`generate`] emits, saturating at `usize::MAX`.
pub fn triangle_count(bands: u32, slices: u32) -> usize {
    // Base fan plus wall, both one triangle and `bands - 1` tiles per slice.
    let per_part = (bands as usize).saturating_mul(2).saturating_sub(1);

    (slices as usize).saturating_mul(2).saturating_mul(per_part)
}

/// Point on the rim of a disc of radius 0.5 at `angle`, with the sine going
/// into Z.
pub(crate) fn rim(angle: f32, y: f32) -> Vec3 {
    Vec3::new(RADIUS * angle.cos(), y, RADIUS * angle.sin())
}

/// Fan-tessellates one wedge of a flat disc in `bands` concentric rings from
/// the center out to the rim points `left` and `right`. With `facing_up` the
/// triangles wind towards +Y, otherwise towards -Y.
pub(crate) fn emit_cap_wedge(
    buffer: &mut MeshBuffer,
    left: Vec3,
    right: Vec3,
    bands: u32,
    facing_up: bool,
) {
    let y = left.y;
    let normal = if facing_up { Vec3::Y } else { Vec3::NEG_Y };
    let normals = [normal; 3];
    let ring = |rim: Vec3, step: u32| {
        let scale = step as f32 / bands as f32;
        Vec3::new(rim.x * scale, y, rim.z * scale)
    };

    let center = Vec3::new(0.0, y, 0.0);
    let mut inner_left = ring(left, 1);
    let mut inner_right = ring(right, 1);

    if facing_up {
        emit_triangle(buffer, [center, inner_right, inner_left], normals);
    } else {
        emit_triangle(buffer, [inner_right, center, inner_left], normals);
    }

    for step in 2..=bands {
        let outer_left = ring(left, step);
        let outer_right = ring(right, step);

        if facing_up {
            emit_triangle(buffer, [outer_left, inner_left, inner_right], normals);
            emit_triangle(buffer, [outer_left, inner_right, outer_right], normals);
        } else {
            emit_triangle(buffer, [inner_left, outer_left, inner_right], normals);
            emit_triangle(buffer, [inner_right, outer_left, outer_right], normals);
        }

        inner_left = outer_left;
        inner_right = outer_right;
    }
}

/// A cone of height 1 and base radius 0.5 centered on the origin, apex up.
///
/// Each of the `slices` wedges gets a fan-tessellated base and a wall of
/// `bands` stacked rows. The top row degenerates into a single triangle at the
/// apex; the rows below are tiles with analytic normals.
pub fn generate(bands: u32, slices: u32) -> MeshBuffer {
    let mut buffer = MeshBuffer::with_triangle_capacity(
        VertexLayout::PositionNormal,
        triangle_count(bands, slices),
    );
    let slice_angle = TAU / slices as f32;
    let apex = Vec3::new(0.0, APEX_HEIGHT, 0.0);

    for slice in 0..slices {
        let base_left = rim(slice as f32 * slice_angle, -APEX_HEIGHT);
        let base_right = rim((slice + 1) as f32 * slice_angle, -APEX_HEIGHT);

        emit_cap_wedge(&mut buffer, base_left, base_right, bands, false);

        let step_left = (base_left - apex) / bands as f32;
        let step_right = (base_right - apex) / bands as f32;

        let mut upper_left = apex + step_left;
        let mut upper_right = apex + step_right;

        let normal_left = analytic_normal(upper_left);
        let normal_right = analytic_normal(upper_right);
        emit_triangle(
            &mut buffer,
            [upper_left, apex, upper_right],
            [
                normal_left,
                safe_normalize(normal_left + normal_right),
                normal_right,
            ],
        );

        for _ in 2..=bands {
            let lower_left = upper_left + step_left;
            let lower_right = upper_right + step_right;

            // Viewed from outside, the wedge's right edge is on the left.
            let tile = Tile::new(upper_right, upper_left, lower_right, lower_left);
            emit_tile(&mut buffer, &tile, NormalMode::Analytic);

            upper_left = lower_left;
            upper_right = lower_right;
        }
    }

    buffer
}
