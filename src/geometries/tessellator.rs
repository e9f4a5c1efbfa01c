//! Shared triangle and tile emission used by every shape.

use glam::Vec3;

use super::{ColoredVertex, MeshBuffer, Vertex};

/// How [`emit_tile`] derives per-corner normals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NormalMode {
    /// Gradient of the cone surface around the Y axis, evaluated at the
    /// corner: `normalize(2x, 0.25 - 0.5y, 2z)`.
    Analytic,
    /// Cross product of the two tile edges leaving the corner. The four
    /// corners of a non-planar tile get four different normals.
    FaceDerived,
    /// Direction from the origin to the corner.
    Radial,
}

/// Four corners of a quadrilateral, named as seen from its visible side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    pub top_left: Vec3,
    pub top_right: Vec3,
    pub bottom_left: Vec3,
    pub bottom_right: Vec3,
}

impl Tile {
    pub fn new(top_left: Vec3, top_right: Vec3, bottom_left: Vec3, bottom_right: Vec3) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Corner normals in `[top_left, top_right, bottom_left, bottom_right]`
    /// order.
    pub fn normals(&self, mode: NormalMode) -> [Vec3; 4] {
        let Self {
            top_left: tl,
            top_right: tr,
            bottom_left: bl,
            bottom_right: br,
        } = *self;

        match mode {
            NormalMode::Analytic => [tl, tr, bl, br].map(analytic_normal),
            NormalMode::FaceDerived => [
                safe_normalize((bl - tl).cross(tr - tl)),
                safe_normalize((tl - tr).cross(br - tr)),
                safe_normalize((br - bl).cross(tl - bl)),
                safe_normalize((tr - br).cross(bl - br)),
            ],
            NormalMode::Radial => [tl, tr, bl, br].map(safe_normalize),
        }
    }
}

/// Normalizes `v`, falling back to the zero vector when `v` has no usable
/// length. Never returns NaN.
pub fn safe_normalize(v: Vec3) -> Vec3 {
    let normalized = v.normalize_or_zero();

    if normalized == Vec3::ZERO {
        tracing::trace!(?v, "degenerate normal, using zero vector");
    }

    normalized
}

/// Surface-of-revolution normal at `p`, see [`NormalMode::Analytic`].
pub fn analytic_normal(p: Vec3) -> Vec3 {
    safe_normalize(Vec3::new(2.0 * p.x, -0.5 * p.y + 0.25, 2.0 * p.z))
}

/// Appends one triangle in the given winding order. Counter-clockwise
/// triangles face the viewer.
pub fn emit_triangle(buffer: &mut MeshBuffer, points: [Vec3; 3], normals: [Vec3; 3]) {
    for (point, normal) in points.into_iter().zip(normals) {
        buffer.push(Vertex::new(point, normal));
    }
}

/// Appends one triangle of colored vertices.
pub fn emit_colored_triangle(buffer: &mut MeshBuffer, vertices: [ColoredVertex; 3]) {
    for vertex in vertices {
        buffer.push(vertex);
    }
}

/// Splits `tile` into the triangles `(top_left, bottom_left, bottom_right)`
/// and `(top_left, bottom_right, top_right)`.
pub fn emit_tile(buffer: &mut MeshBuffer, tile: &Tile, mode: NormalMode) {
    let [n_tl, n_tr, n_bl, n_br] = tile.normals(mode);

    emit_triangle(
        buffer,
        [tile.top_left, tile.bottom_left, tile.bottom_right],
        [n_tl, n_bl, n_br],
    );
    emit_triangle(
        buffer,
        [tile.top_left, tile.bottom_right, tile.top_right],
        [n_tl, n_br, n_tr],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometries::VertexLayout;

    fn unit_square() -> Tile {
        Tile::new(
            Vec3::new(-0.5, 0.5, 0.0),
            Vec3::new(0.5, 0.5, 0.0),
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
        )
    }

    #[test]
    fn tile_emits_two_triangles_in_order() {
        let mut buffer = MeshBuffer::new(VertexLayout::PositionNormal);
        let tile = unit_square();
        emit_tile(&mut buffer, &tile, NormalMode::FaceDerived);

        let positions: Vec<Vec3> = buffer.vertices().map(|(p, _)| p).collect();
        assert_eq!(buffer.triangle_count(), 2);
        assert_eq!(
            positions,
            vec![
                tile.top_left,
                tile.bottom_left,
                tile.bottom_right,
                tile.top_left,
                tile.bottom_right,
                tile.top_right,
            ]
        );
    }

    #[test]
    fn planar_tile_faces_viewer() {
        for normal in unit_square().normals(NormalMode::FaceDerived) {
            assert!((normal - Vec3::Z).length() < 1e-6);
        }
    }

    #[test]
    fn face_normals_differ_per_corner_on_warped_tile() {
        let mut tile = unit_square();
        tile.top_right.z = 0.3;
        let normals = tile.normals(NormalMode::FaceDerived);

        assert!((normals[0] - normals[2]).length() > 1e-3);
        assert!(normals.iter().all(|n| (n.length() - 1.0).abs() < 1e-5));
    }

    #[test]
    fn analytic_normal_points_away_from_axis() {
        let normal = analytic_normal(Vec3::new(0.5, -0.5, 0.0));

        assert!((normal.length() - 1.0).abs() < 1e-6);
        assert!(normal.x > 0.0 && normal.y > 0.0);
        assert_eq!(normal.z, 0.0);
    }

    #[test]
    fn degenerate_normals_become_zero() {
        let point = Vec3::new(0.3, 0.2, 0.1);
        let tile = Tile::new(point, point, point, point);

        for normal in tile.normals(NormalMode::FaceDerived) {
            assert_eq!(normal, Vec3::ZERO);
        }
        assert_eq!(safe_normalize(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn triangle_keeps_given_winding() {
        let mut buffer = MeshBuffer::new(VertexLayout::PositionNormal);
        emit_triangle(&mut buffer, [Vec3::X, Vec3::Y, Vec3::Z], [Vec3::Y; 3]);

        assert_eq!(&buffer.as_slice()[..6], &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(&buffer.as_slice()[12..15], &[0.0, 0.0, 1.0]);
    }
}
