use std::mem::size_of;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Interleaving of attributes in a [`MeshBuffer`](super::MeshBuffer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VertexLayout {
    /// Position followed by normal, 6 floats per vertex.
    PositionNormal,
    /// Position, normal and color, 9 floats per vertex.
    PositionNormalColor,
}

impl VertexLayout {
    /// Number of floats per vertex record, also known as the stride.
    pub const fn floats_per_vertex(self) -> usize {
        match self {
            Self::PositionNormal => 6,
            Self::PositionNormalColor => 9,
        }
    }

    /// Number of floats taken by one triangle.
    pub const fn floats_per_triangle(self) -> usize {
        self.floats_per_vertex() * 3
    }

    /// Byte distance between consecutive vertex records.
    pub const fn stride_bytes(self) -> u64 {
        (self.floats_per_vertex() * size_of::<f32>()) as u64
    }
}

/// A vertex record that can be appended to a [`MeshBuffer`](super::MeshBuffer).
pub trait VertexRecord: Pod {
    /// Layout this record is written in.
    const LAYOUT: VertexLayout;
}

/// Vertex with a position and a normal.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

impl VertexRecord for Vertex {
    const LAYOUT: VertexLayout = VertexLayout::PositionNormal;
}

/// Vertex with a position, a normal and an RGB color.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ColoredVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl ColoredVertex {
    pub fn new(position: Vec3, normal: Vec3, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color: color.to_array(),
        }
    }
}

impl VertexRecord for ColoredVertex {
    const LAYOUT: VertexLayout = VertexLayout::PositionNormalColor;
}
