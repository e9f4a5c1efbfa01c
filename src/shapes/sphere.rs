use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::geometries::{emit_tile, MeshBuffer, NormalMode, Tile, VertexLayout};

const RADIUS: f32 = 0.5;

pub fn triangle_count(latitude_bands: u32, longitude_wedges: u32) -> usize {
    (latitude_bands as usize)
        .saturating_mul(longitude_wedges as usize)
        .saturating_mul(2)
}

/// Point at polar angle `phi` (measured from +Y) and azimuth `theta`
/// (measured from +Z towards +X).
fn spherical(phi: f32, theta: f32) -> Vec3 {
    Vec3::new(
        RADIUS * phi.sin() * theta.sin(),
        RADIUS * phi.cos(),
        RADIUS * phi.sin() * theta.cos(),
    )
}

/// A UV sphere of radius 0.5 centered on the origin, cut into
/// `longitude_wedges` wedges of `latitude_bands` tiles from pole to pole.
/// Normals point radially outward.
///
/// The tiles touching a pole have two coincident corners, so one of their
/// two triangles has zero area.
pub fn generate(latitude_bands: u32, longitude_wedges: u32) -> MeshBuffer {
    let mut buffer = MeshBuffer::with_triangle_capacity(
        VertexLayout::PositionNormal,
        triangle_count(latitude_bands, longitude_wedges),
    );
    let theta_step = TAU / longitude_wedges as f32;
    let phi_step = PI / latitude_bands as f32;

    for wedge in 0..longitude_wedges {
        let theta = wedge as f32 * theta_step;
        let next_theta = theta + theta_step;

        for band in 0..latitude_bands {
            let phi = band as f32 * phi_step;
            let next_phi = phi + phi_step;

            let tile = Tile::new(
                spherical(next_phi, next_theta),
                spherical(next_phi, theta),
                spherical(phi, next_theta),
                spherical(phi, theta),
            );
            emit_tile(&mut buffer, &tile, NormalMode::Radial);
        }
    }

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huge_parameters_saturate_triangle_count() {
        assert_eq!(triangle_count(u32::MAX, u32::MAX), usize::MAX);
        assert_eq!(triangle_count(3, 5), 30);
    }

    #[test]
    fn normals_are_unit_and_radial() {
        for (latitude_bands, longitude_wedges) in [(2, 3), (5, 7), (16, 24)] {
            for (position, normal) in generate(latitude_bands, longitude_wedges).vertices() {
                assert!((normal.length() - 1.0).abs() < 1e-5);
                assert!(normal.cross(position).length() < 1e-5);
                assert!(normal.dot(position) > 0.0);
            }
        }
    }

    #[test]
    fn vertices_lie_on_the_sphere() {
        for (position, _) in generate(6, 9).vertices() {
            assert!((position.length() - RADIUS).abs() < 1e-5);
        }
    }

    #[test]
    fn non_degenerate_triangles_face_outward() {
        let vertices: Vec<_> = generate(8, 12).vertices().collect();

        for triangle in vertices.chunks_exact(3) {
            let face = (triangle[1].0 - triangle[0].0).cross(triangle[2].0 - triangle[0].0);
            if face.length() < 1e-7 {
                continue;
            }
            let centroid = triangle.iter().map(|(p, _)| *p).sum::<Vec3>() / 3.0;

            assert!(face.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn covers_both_poles() {
        let positions: Vec<Vec3> = generate(4, 4).vertices().map(|(p, _)| p).collect();

        assert!(positions.iter().any(|p| (p.y - RADIUS).abs() < 1e-6));
        assert!(positions.iter().any(|p| (p.y + RADIUS).abs() < 1e-6));
    }
}
