use std::fmt;

use crate::{geometries::VertexLayout, shapes::ShapeKind};

/// Which of the two tessellation parameters a [`ShapeError`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParameterSlot {
    First,
    Second,
}

impl fmt::Display for ParameterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("parameter 1"),
            Self::Second => f.write_str("parameter 2"),
        }
    }
}

/// Errors returned while configuring or reading shape generators.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// A tessellation parameter is below the minimum of its shape.
    #[error("{kind} {parameter} must be at least {minimum}, got {value}")]
    ParameterRange {
        kind: ShapeKind,
        parameter: ParameterSlot,
        minimum: u32,
        value: u32,
    },
    /// The generator has not been given parameters yet.
    #[error("no shape has been generated yet")]
    NotGenerated,
    /// A terrain patch needs at least one cell per side.
    #[error("terrain resolution must be at least 1, got {value}")]
    TerrainResolution { value: u32 },
    /// Two buffers with different vertex layouts cannot be concatenated.
    #[error("cannot append {found:?} vertices to a {expected:?} buffer")]
    LayoutMismatch {
        expected: VertexLayout,
        found: VertexLayout,
    },
}
