use glam::Vec3;

use crate::{
    core::ShapeError,
    geometries::{
        tessellator::{emit_colored_triangle, safe_normalize},
        ColoredVertex, Geometry, MeshBuffer, VertexLayout,
    },
    noise::NoiseField,
};

/// Vertices at or above this height are colored as peaks.
const PEAK_HEIGHT: f32 = 0.002;
/// Upper bound on `dot(normal, +Z)` for peak coloring. No unit normal exceeds
/// it, so only the height decides the color.
const PEAK_MAX_UPNESS: f32 = 2.0;
const PEAK_COLOR: Vec3 = Vec3::ONE;
const GROUND_COLOR: Vec3 = Vec3::splat(0.5);

/// Neighbors of a grid vertex, counter-clockwise in the XY plane.
const NEIGHBOR_RING: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// Fractal terrain over the unit square `[0, 1]²` in the XY plane, displaced
/// along +Z. Produces [`VertexLayout::PositionNormalColor`] buffers with
/// smoothed per-vertex normals and height-based colors.
#[derive(Clone, Debug)]
pub struct TerrainPatch {
    resolution: u32,
    noise: NoiseField,
}

impl TerrainPatch {
    /// Number of grid cells per side used by [`new`](Self::new).
    pub const DEFAULT_RESOLUTION: u32 = 100;

    pub fn new() -> Self {
        Self {
            resolution: Self::DEFAULT_RESOLUTION,
            noise: NoiseField::new(),
        }
    }

    /// Creates a patch with `resolution` grid cells per side.
    pub fn with_resolution(resolution: u32) -> Result<Self, ShapeError> {
        if resolution == 0 {
            return Err(ShapeError::TerrainResolution { value: resolution });
        }

        Ok(Self {
            resolution,
            noise: NoiseField::new(),
        })
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Position of grid vertex `(row, col)`. Rows and columns outside
    /// `0..=resolution` extend the grid past the patch border.
    pub fn position(&self, row: i32, col: i32) -> Vec3 {
        let x = row as f32 / self.resolution as f32;
        let y = col as f32 / self.resolution as f32;

        Vec3::new(x, y, self.noise.height(x, y))
    }

    /// Smoothed normal of grid vertex `(row, col)`: the sum of the cross
    /// products of consecutive neighbor offsets around the vertex, normalized
    /// once.
    pub fn normal(&self, row: i32, col: i32) -> Vec3 {
        let center = self.position(row, col);
        let offsets = NEIGHBOR_RING
            .map(|(dr, dc)| self.position(row.wrapping_add(dr), col.wrapping_add(dc)) - center);

        Self::ring_normal(&offsets)
    }

    fn ring_normal(offsets: &[Vec3; 8]) -> Vec3 {
        let sum = (0..offsets.len())
            .map(|i| offsets[i].cross(offsets[(i + 1) % offsets.len()]))
            .sum::<Vec3>();

        safe_normalize(sum)
    }

    /// Color of a vertex: white peaks, gray everywhere else.
    pub fn color(normal: Vec3, position: Vec3) -> Vec3 {
        if position.z >= PEAK_HEIGHT && normal.dot(Vec3::Z) <= PEAK_MAX_UPNESS {
            PEAK_COLOR
        } else {
            GROUND_COLOR
        }
    }

    fn triangle_count(&self) -> usize {
        2 * (self.resolution as usize).pow(2)
    }
}

impl Default for TerrainPatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Heights and normals of every grid vertex, sampled once per tessellation.
struct VertexGrid {
    side: usize,
    vertices: Vec<ColoredVertex>,
}

impl VertexGrid {
    fn sample(patch: &TerrainPatch) -> Self {
        let resolution = patch.resolution as i32;
        // One extra ring of positions so border normals see all neighbors.
        let padded_side = (resolution + 3) as usize;
        let positions: Vec<Vec3> = (-1..=resolution + 1)
            .flat_map(|row| (-1..=resolution + 1).map(move |col| (row, col)))
            .map(|(row, col)| patch.position(row, col))
            .collect();
        let padded = |row: i32, col: i32| positions[(row + 1) as usize * padded_side + (col + 1) as usize];

        let vertices = (0..=resolution)
            .flat_map(|row| (0..=resolution).map(move |col| (row, col)))
            .map(|(row, col)| {
                let center = padded(row, col);
                let offsets = NEIGHBOR_RING.map(|(dr, dc)| padded(row + dr, col + dc) - center);
                let normal = TerrainPatch::ring_normal(&offsets);

                ColoredVertex::new(center, normal, TerrainPatch::color(normal, center))
            })
            .collect();

        Self {
            side: (resolution + 1) as usize,
            vertices,
        }
    }

    fn get(&self, row: usize, col: usize) -> ColoredVertex {
        self.vertices[row * self.side + col]
    }
}

impl Geometry for TerrainPatch {
    fn layout(&self) -> VertexLayout {
        VertexLayout::PositionNormalColor
    }

    fn vertices(&self) -> MeshBuffer {
        let mut buffer = MeshBuffer::with_triangle_capacity(self.layout(), self.triangle_count());
        let grid = VertexGrid::sample(self);
        let resolution = self.resolution as usize;

        for row in 0..resolution {
            for col in 0..resolution {
                let v1 = grid.get(row, col);
                let v2 = grid.get(row + 1, col);
                let v3 = grid.get(row + 1, col + 1);
                let v4 = grid.get(row, col + 1);

                emit_colored_triangle(&mut buffer, [v1, v2, v3]);
                emit_colored_triangle(&mut buffer, [v1, v3, v4]);
            }
        }

        tracing::debug!(
            resolution = self.resolution,
            triangles = buffer.triangle_count(),
            "generated terrain patch"
        );

        buffer
    }
}
