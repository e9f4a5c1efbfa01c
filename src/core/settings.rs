use crate::shapes::{ShapeKind, ShapeParameters};

/// User-facing configuration of a [`ShapeGenerator`](super::ShapeGenerator),
/// typically owned by the user interface and handed over whenever a control
/// changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// The selected solid.
    pub shape_kind: ShapeKind,
    /// First tessellation parameter. See [`ShapeParameters::param1`].
    pub shape_parameter1: u32,
    /// Second tessellation parameter. See [`ShapeParameters::param2`].
    pub shape_parameter2: u32,
    /// Whether the wireframe and vertex normals should be drawn on top of the
    /// shaded mesh.
    pub show_wireframe_normals: bool,
}

impl Settings {
    /// The selected kind and both tessellation parameters as unvalidated
    /// [`ShapeParameters`]. Range checks happen when the generator converts
    /// them into a [`Shape`](crate::shapes::Shape).
    pub fn shape_parameters(&self) -> ShapeParameters {
        ShapeParameters::new(
            self.shape_kind,
            self.shape_parameter1,
            self.shape_parameter2,
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shape_kind: ShapeKind::Triangle,
            shape_parameter1: 1,
            shape_parameter2: 1,
            show_wireframe_normals: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_parameters_mirror_the_selection() {
        let settings = Settings {
            shape_kind: ShapeKind::Cone,
            shape_parameter1: 0,
            shape_parameter2: 7,
            ..Settings::default()
        };

        // Out-of-range values pass through; validation happens later.
        assert_eq!(
            settings.shape_parameters(),
            ShapeParameters::new(ShapeKind::Cone, 0, 7)
        );
    }
}
