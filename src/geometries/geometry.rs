use super::{MeshBuffer, VertexLayout};

/// Generator of triangle-list vertex buffers. Implemented on every validated
/// shape description.
///
/// There is an emphasis on the word "generator": [`vertices`](Self::vertices)
/// tessellates from scratch every time it is invoked. To keep the result
/// around, store the returned [`MeshBuffer`] or use a
/// [`ShapeGenerator`](crate::ShapeGenerator).
pub trait Geometry {
    /// The vertex layout of the buffers this geometry produces.
    fn layout(&self) -> VertexLayout;
    /// Generates the interleaved vertex buffer for this geometry.
    fn vertices(&self) -> MeshBuffer;
}
