use tracing::{debug, warn};

use super::{Settings, ShapeError};
use crate::{
    geometries::MeshBuffer,
    noise::NoiseField,
    shapes::{Shape, ShapeParameters},
};

/// Lifecycle of a [`ShapeGenerator`].
#[derive(Clone, Debug)]
enum GeneratorState {
    /// No parameters have been accepted yet.
    Uninitialized,
    /// The buffer of `shape` is ready.
    Generated { shape: Shape, buffer: MeshBuffer },
}

/// Line-list overlays drawn on top of a shaded mesh. Every consecutive pair
/// of positions (3 floats each) is one segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    /// The three edges of every triangle.
    pub wireframe: Vec<f32>,
    /// One segment per vertex along its normal.
    pub normals: Vec<f32>,
}

/// Owns the vertex buffer of one shape and regenerates it whenever its
/// parameters change.
///
/// Parameters are validated before anything is tessellated, so a rejected
/// [`set_parameters`](Self::set_parameters) call leaves the previous buffer
/// untouched.
#[derive(Clone, Debug)]
pub struct ShapeGenerator {
    noise: NoiseField,
    state: GeneratorState,
}

impl ShapeGenerator {
    /// Creates an uninitialized generator. The noise field used by the cube
    /// is built here once and reused for every regeneration.
    pub fn new() -> Self {
        Self {
            noise: NoiseField::new(),
            state: GeneratorState::Uninitialized,
        }
    }

    /// Validates `parameters` and synchronously tessellates the new shape.
    ///
    /// # Errors
    ///
    /// [`ShapeError::ParameterRange`] if either parameter is below the
    /// minimum of the selected shape kind.
    pub fn set_parameters(&mut self, parameters: ShapeParameters) -> Result<(), ShapeError> {
        let shape = parameters.validate().inspect_err(|error| {
            warn!(?parameters, %error, "rejected shape parameters");
        })?;

        self.regenerate(shape);

        Ok(())
    }

    /// Applies the shape selection of `settings`, regenerating only if the
    /// validated shape differs from the current one. Returns whether the
    /// buffer was regenerated.
    pub fn apply_settings(&mut self, settings: &Settings) -> Result<bool, ShapeError> {
        let shape = settings.shape_parameters().validate().inspect_err(|error| {
            warn!(?settings, %error, "rejected settings");
        })?;

        if self.shape() == Some(shape) {
            debug!(?shape, "shape unchanged, keeping buffer");
            return Ok(false);
        }

        self.regenerate(shape);

        Ok(true)
    }

    fn regenerate(&mut self, shape: Shape) {
        let buffer = shape.tessellate(&self.noise);

        debug!(
            ?shape,
            triangles = buffer.triangle_count(),
            floats = buffer.len(),
            "generated shape"
        );

        self.state = GeneratorState::Generated { shape, buffer };
    }

    /// The currently generated shape, if any.
    pub fn shape(&self) -> Option<Shape> {
        match &self.state {
            GeneratorState::Uninitialized => None,
            GeneratorState::Generated { shape, .. } => Some(*shape),
        }
    }

    /// The generated mesh.
    ///
    /// # Errors
    ///
    /// [`ShapeError::NotGenerated`] before the first successful
    /// [`set_parameters`](Self::set_parameters).
    pub fn mesh(&self) -> Result<&MeshBuffer, ShapeError> {
        match &self.state {
            GeneratorState::Uninitialized => Err(ShapeError::NotGenerated),
            GeneratorState::Generated { buffer, .. } => Ok(buffer),
        }
    }

    /// The flat interleaved position and normal floats of the generated
    /// mesh. Returns the same content until the parameters change.
    pub fn generate_vertex_buffer(&self) -> Result<&[f32], ShapeError> {
        self.mesh().map(MeshBuffer::as_slice)
    }

    /// Builds the wireframe and normal overlays when `settings` asks for
    /// them. Normals are drawn `normal_length` long.
    pub fn overlay(&self, settings: &Settings, normal_length: f32) -> Option<Overlay> {
        if !settings.show_wireframe_normals {
            return None;
        }

        let mesh = self.mesh().ok()?;

        Some(Overlay {
            wireframe: mesh.wireframe_lines(),
            normals: mesh.normal_lines(normal_length),
        })
    }
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind;

    #[test]
    fn starts_uninitialized() {
        let generator = ShapeGenerator::new();

        assert_eq!(generator.shape(), None);
        assert_eq!(
            generator.generate_vertex_buffer(),
            Err(ShapeError::NotGenerated)
        );
        assert!(generator.overlay(&Settings::default(), 0.1).is_none());
    }

    #[test]
    fn apply_settings_skips_unchanged_shape() {
        let mut generator = ShapeGenerator::new();
        let mut settings = Settings {
            shape_kind: ShapeKind::Cone,
            shape_parameter1: 2,
            shape_parameter2: 5,
            ..Settings::default()
        };

        assert_eq!(generator.apply_settings(&settings), Ok(true));
        assert_eq!(generator.apply_settings(&settings), Ok(false));

        settings.shape_parameter2 = 6;
        assert_eq!(generator.apply_settings(&settings), Ok(true));
        assert_eq!(
            generator.shape(),
            Some(Shape::Cone {
                bands: 2,
                slices: 6
            })
        );
    }

    #[test]
    fn triangle_ignores_parameter_changes() {
        let mut generator = ShapeGenerator::new();
        let mut settings = Settings::default();

        assert_eq!(generator.apply_settings(&settings), Ok(true));
        settings.shape_parameter1 = 40;
        assert_eq!(generator.apply_settings(&settings), Ok(false));
    }

    #[test]
    fn rejected_settings_keep_buffer() {
        let mut generator = ShapeGenerator::new();
        let mut settings = Settings {
            shape_kind: ShapeKind::Cylinder,
            shape_parameter1: 3,
            shape_parameter2: 4,
            ..Settings::default()
        };
        generator.apply_settings(&settings).unwrap();
        let before = generator.generate_vertex_buffer().unwrap().to_vec();

        settings.shape_parameter2 = 2;
        assert!(generator.apply_settings(&settings).is_err());
        assert_eq!(generator.generate_vertex_buffer().unwrap(), before.as_slice());
    }

    #[test]
    fn overlay_follows_settings() {
        let mut generator = ShapeGenerator::new();
        generator
            .set_parameters(ShapeParameters::new(ShapeKind::Sphere, 3, 4))
            .unwrap();
        let triangles = generator.mesh().unwrap().triangle_count();

        let mut settings = Settings::default();
        let overlay = generator.overlay(&settings, 0.05).unwrap();
        assert_eq!(overlay.wireframe.len(), triangles * 18);
        assert_eq!(overlay.normals.len(), triangles * 18);

        settings.show_wireframe_normals = false;
        assert!(generator.overlay(&settings, 0.05).is_none());
    }
}
