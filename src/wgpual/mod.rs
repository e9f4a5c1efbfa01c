//! WebGPU Abstraction Layer (WGPUAL).
//!
//! This layer describes generated meshes to WebGPU so a renderer can upload
//! and draw them without knowing their interleaving.

mod vertex_buffers;

pub use vertex_buffers::*;
