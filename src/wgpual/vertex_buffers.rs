use wgpu::{util::DeviceExt, VertexAttribute};

use crate::geometries::{MeshBuffer, VertexLayout};

/// Shader location of the position attribute.
pub const POSITION_LOCATION: u32 = 0;
/// Shader location of the normal attribute.
pub const NORMAL_LOCATION: u32 = 1;
/// Shader location of the color attribute.
pub const COLOR_LOCATION: u32 = 2;

static POSITION_NORMAL_ATTRIBUTES: [VertexAttribute; 2] = [
    VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 0,
        shader_location: POSITION_LOCATION,
    },
    VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 3 * 4,
        shader_location: NORMAL_LOCATION,
    },
];

static POSITION_NORMAL_COLOR_ATTRIBUTES: [VertexAttribute; 3] = [
    VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 0,
        shader_location: POSITION_LOCATION,
    },
    VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 3 * 4,
        shader_location: NORMAL_LOCATION,
    },
    VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 6 * 4,
        shader_location: COLOR_LOCATION,
    },
];

static LINE_ATTRIBUTES: [VertexAttribute; 1] = [VertexAttribute {
    format: wgpu::VertexFormat::Float32x3,
    offset: 0,
    shader_location: POSITION_LOCATION,
}];

/// Describes how a [`MeshBuffer`] of the given layout is read by the vertex
/// stage: position at offset 0, normal at offset 12 and, if present, color at
/// offset 24.
pub fn vertex_buffer_layout(layout: VertexLayout) -> wgpu::VertexBufferLayout<'static> {
    let attributes: &'static [VertexAttribute] = match layout {
        VertexLayout::PositionNormal => &POSITION_NORMAL_ATTRIBUTES,
        VertexLayout::PositionNormalColor => &POSITION_NORMAL_COLOR_ATTRIBUTES,
    };

    wgpu::VertexBufferLayout {
        array_stride: layout.stride_bytes(),
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes,
    }
}

/// Layout of the position-only line lists built by
/// [`MeshBuffer::wireframe_lines`] and [`MeshBuffer::normal_lines`].
pub fn line_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: 3 * 4,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &LINE_ATTRIBUTES,
    }
}

/// Creates a GPU vertex buffer initialized with the contents of `mesh`. The
/// buffer can be rewritten later with [`write_vertex_buffer`].
pub fn create_vertex_buffer(
    device: &wgpu::Device,
    mesh: &MeshBuffer,
    label: Option<&str>,
) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label,
        contents: mesh.as_bytes(),
        usage: wgpu::BufferUsages::VERTEX.union(wgpu::BufferUsages::COPY_DST),
    })
}

/// Uploads `mesh` into an existing vertex buffer, starting at its first byte.
/// Returns `false` without writing when the buffer is too small.
pub fn write_vertex_buffer(queue: &wgpu::Queue, buffer: &wgpu::Buffer, mesh: &MeshBuffer) -> bool {
    let bytes = mesh.as_bytes();

    if bytes.len() as u64 > buffer.size() {
        tracing::warn!(
            needed = bytes.len(),
            available = buffer.size(),
            "vertex buffer too small for mesh"
        );
        return false;
    }

    queue.write_buffer(buffer, 0, bytes);

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_match_vertex_strides() {
        let plain = vertex_buffer_layout(VertexLayout::PositionNormal);
        let colored = vertex_buffer_layout(VertexLayout::PositionNormalColor);

        assert_eq!(plain.array_stride, 24);
        assert_eq!(plain.attributes.len(), 2);
        assert_eq!(colored.array_stride, 36);
        assert_eq!(colored.attributes[2].offset, 24);
        assert_eq!(line_buffer_layout().array_stride, 12);
    }
}
