use glam::Vec3;

use super::{Geometry, VertexLayout, VertexRecord};
use crate::core::ShapeError;

/// Flat, interleaved triangle list ready for upload to a GPU vertex buffer.
///
/// Every consecutive triplet of vertex records forms one triangle; vertices
/// are never shared between triangles. Within a record, the position comes
/// first, then the normal, then (for
/// [`PositionNormalColor`](VertexLayout::PositionNormalColor)) the color.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshBuffer {
    layout: VertexLayout,
    data: Vec<f32>,
}

impl MeshBuffer {
    /// Creates an empty buffer with the given vertex layout.
    pub fn new(layout: VertexLayout) -> Self {
        Self {
            layout,
            data: Vec::new(),
        }
    }

    /// Creates an empty buffer with room for `triangles` triangles. A request
    /// too large to allocate up front leaves the buffer to grow on demand.
    pub fn with_triangle_capacity(layout: VertexLayout, triangles: usize) -> Self {
        let mut data = Vec::new();
        let _ = data.try_reserve(triangles.saturating_mul(layout.floats_per_triangle()));

        Self { layout, data }
    }

    /// Creates a mesh buffer from the given geometry generator.
    pub fn from_geometry<G: Geometry>(geometry: &G) -> Self {
        geometry.vertices()
    }

    /// Vertex layout of this buffer.
    pub fn layout(&self) -> VertexLayout {
        self.layout
    }

    /// The interleaved floats.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// The interleaved floats as raw bytes, in native endianness.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Consumes the buffer and returns the interleaved floats.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Number of floats in the buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of vertex records, which is also the vertex count of the draw
    /// call.
    pub fn vertex_count(&self) -> usize {
        self.data.len() / self.layout.floats_per_vertex()
    }

    pub fn triangle_count(&self) -> usize {
        self.data.len() / self.layout.floats_per_triangle()
    }

    /// Iterates over the position and normal of every vertex record.
    pub fn vertices(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.data
            .chunks_exact(self.layout.floats_per_vertex())
            .map(|record| {
                (
                    Vec3::from_slice(&record[0..3]),
                    Vec3::from_slice(&record[3..6]),
                )
            })
    }

    /// Iterates over vertex colors. Yields nothing for layouts without color.
    pub fn colors(&self) -> impl Iterator<Item = Vec3> + '_ {
        let stride = self.layout.floats_per_vertex();
        let has_color = self.layout == VertexLayout::PositionNormalColor;

        self.data
            .chunks_exact(stride)
            .filter(move |_| has_color)
            .map(|record| Vec3::from_slice(&record[6..9]))
    }

    /// Appends the triangles of `other` to this buffer.
    pub fn append(&mut self, other: &MeshBuffer) -> Result<(), ShapeError> {
        if other.layout != self.layout {
            return Err(ShapeError::LayoutMismatch {
                expected: self.layout,
                found: other.layout,
            });
        }

        self.data.extend_from_slice(&other.data);

        Ok(())
    }

    /// Builds a line list that draws every vertex normal as a segment of the
    /// given length starting at the vertex. Every consecutive pair of
    /// positions (3 floats each) is one segment.
    pub fn normal_lines(&self, length: f32) -> Vec<f32> {
        let mut lines = Vec::with_capacity(self.vertex_count() * 6);

        for (position, normal) in self.vertices() {
            lines.extend_from_slice(&position.to_array());
            lines.extend_from_slice(&(position + normal * length).to_array());
        }

        lines
    }

    /// Builds a line list with the three edges of every triangle.
    pub fn wireframe_lines(&self) -> Vec<f32> {
        let positions: Vec<Vec3> = self.vertices().map(|(position, _)| position).collect();
        let mut lines = Vec::with_capacity(self.triangle_count() * 18);

        for triangle in positions.chunks_exact(3) {
            for (start, end) in [(0, 1), (1, 2), (2, 0)] {
                lines.extend_from_slice(&triangle[start].to_array());
                lines.extend_from_slice(&triangle[end].to_array());
            }
        }

        lines
    }

    /// Appends one vertex record. Callers append whole triangles.
    pub(crate) fn push<V: VertexRecord>(&mut self, vertex: V) {
        debug_assert_eq!(V::LAYOUT, self.layout);

        self.data
            .extend_from_slice(bytemuck::cast_slice(std::slice::from_ref(&vertex)));
    }
}
