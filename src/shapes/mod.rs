//! Parametric solids and the fractal terrain patch.
//!
//! Every solid is tessellated by one pure function taking its validated
//! parameters. [`Shape`] tags which function to call.

pub mod cone;
pub mod cube;
pub mod cylinder;
pub mod sphere;
mod terrain;
pub mod triangle;

use std::fmt;

pub use terrain::*;

use crate::{
    core::{ParameterSlot, ShapeError},
    geometries::{Geometry, MeshBuffer, VertexLayout},
    noise::NoiseField,
};

/// The solids a [`ShapeGenerator`](crate::ShapeGenerator) can produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    #[default]
    Triangle,
    Cube,
    Cone,
    Sphere,
    Cylinder,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Triangle,
        ShapeKind::Cube,
        ShapeKind::Cone,
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
    ];

    /// Smallest accepted value of the first and second parameter. A minimum
    /// of 0 means the parameter is ignored.
    pub const fn minimums(self) -> (u32, u32) {
        match self {
            Self::Triangle => (0, 0),
            Self::Cube => (1, 0),
            Self::Cone | Self::Cylinder => (1, 3),
            Self::Sphere => (2, 3),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Triangle => "triangle",
            Self::Cube => "cube",
            Self::Cone => "cone",
            Self::Sphere => "sphere",
            Self::Cylinder => "cylinder",
        };

        f.write_str(name)
    }
}

/// Unvalidated shape selection as it arrives from the user interface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ShapeParameters {
    pub kind: ShapeKind,
    /// Tessellation depth: subdivisions, bands or latitude bands.
    pub param1: u32,
    /// Angular subdivisions around the Y axis. Only used by cones, cylinders
    /// and spheres.
    pub param2: u32,
}

impl ShapeParameters {
    pub fn new(kind: ShapeKind, param1: u32, param2: u32) -> Self {
        Self {
            kind,
            param1,
            param2,
        }
    }

    /// Checks both parameters against the minimums of the shape kind.
    pub fn validate(&self) -> Result<Shape, ShapeError> {
        Shape::try_from(*self)
    }
}

/// A shape with parameters that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Triangle,
    /// Noise-displaced square patch of `subdivisions`² tiles.
    Cube { subdivisions: u32 },
    Cone { bands: u32, slices: u32 },
    Cylinder { bands: u32, slices: u32 },
    Sphere {
        latitude_bands: u32,
        longitude_wedges: u32,
    },
}

impl TryFrom<ShapeParameters> for Shape {
    type Error = ShapeError;

    fn try_from(parameters: ShapeParameters) -> Result<Self, Self::Error> {
        let ShapeParameters {
            kind,
            param1,
            param2,
        } = parameters;
        let (min1, min2) = kind.minimums();

        let check = |parameter, minimum, value| {
            if value < minimum {
                Err(ShapeError::ParameterRange {
                    kind,
                    parameter,
                    minimum,
                    value,
                })
            } else {
                Ok(value)
            }
        };
        let param1 = check(ParameterSlot::First, min1, param1)?;
        let param2 = check(ParameterSlot::Second, min2, param2)?;

        Ok(match kind {
            ShapeKind::Triangle => Shape::Triangle,
            ShapeKind::Cube => Shape::Cube {
                subdivisions: param1,
            },
            ShapeKind::Cone => Shape::Cone {
                bands: param1,
                slices: param2,
            },
            ShapeKind::Cylinder => Shape::Cylinder {
                bands: param1,
                slices: param2,
            },
            ShapeKind::Sphere => Shape::Sphere {
                latitude_bands: param1,
                longitude_wedges: param2,
            },
        })
    }
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Triangle => ShapeKind::Triangle,
            Self::Cube { .. } => ShapeKind::Cube,
            Self::Cone { .. } => ShapeKind::Cone,
            Self::Cylinder { .. } => ShapeKind::Cylinder,
            Self::Sphere { .. } => ShapeKind::Sphere,
        }
    }

    /// Number of triangles [`tessellate`](Self::tessellate) emits.
    pub fn triangle_count(&self) -> usize {
        match *self {
            Self::Triangle => triangle::TRIANGLE_COUNT,
            Self::Cube { subdivisions } => cube::triangle_count(subdivisions),
            Self::Cone { bands, slices } => cone::triangle_count(bands, slices),
            Self::Cylinder { bands, slices } => cylinder::triangle_count(bands, slices),
            Self::Sphere {
                latitude_bands,
                longitude_wedges,
            } => sphere::triangle_count(latitude_bands, longitude_wedges),
        }
    }

    /// Tessellates the shape. Only the cube reads `noise`.
    pub fn tessellate(&self, noise: &NoiseField) -> MeshBuffer {
        match *self {
            Self::Triangle => triangle::generate(),
            Self::Cube { subdivisions } => cube::generate(noise, subdivisions),
            Self::Cone { bands, slices } => cone::generate(bands, slices),
            Self::Cylinder { bands, slices } => cylinder::generate(bands, slices),
            Self::Sphere {
                latitude_bands,
                longitude_wedges,
            } => sphere::generate(latitude_bands, longitude_wedges),
        }
    }
}

impl Geometry for Shape {
    fn layout(&self) -> VertexLayout {
        VertexLayout::PositionNormal
    }

    /// Tessellates with a freshly built [`NoiseField`]. Generators that keep
    /// a field around should call [`Shape::tessellate`] instead.
    fn vertices(&self) -> MeshBuffer {
        self.tessellate(&NoiseField::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_accepts_any_parameters() {
        for (param1, param2) in [(0, 0), (1, 1), (50, 0), (0, 99)] {
            let parameters = ShapeParameters::new(ShapeKind::Triangle, param1, param2);
            assert_eq!(parameters.validate(), Ok(Shape::Triangle));
        }
    }

    #[test]
    fn minimums_are_enforced_per_kind() {
        let cases = [
            (ShapeKind::Cube, 0, 0, ParameterSlot::First, 1),
            (ShapeKind::Cone, 0, 3, ParameterSlot::First, 1),
            (ShapeKind::Cone, 1, 2, ParameterSlot::Second, 3),
            (ShapeKind::Cylinder, 4, 0, ParameterSlot::Second, 3),
            (ShapeKind::Sphere, 1, 3, ParameterSlot::First, 2),
            (ShapeKind::Sphere, 2, 2, ParameterSlot::Second, 3),
        ];

        for (kind, param1, param2, parameter, minimum) in cases {
            let error = ShapeParameters::new(kind, param1, param2)
                .validate()
                .unwrap_err();
            let value = match parameter {
                ParameterSlot::First => param1,
                ParameterSlot::Second => param2,
            };

            assert_eq!(
                error,
                ShapeError::ParameterRange {
                    kind,
                    parameter,
                    minimum,
                    value,
                }
            );
        }
    }

    #[test]
    fn first_parameter_is_reported_before_second() {
        let error = ShapeParameters::new(ShapeKind::Sphere, 0, 0)
            .validate()
            .unwrap_err();

        assert!(matches!(
            error,
            ShapeError::ParameterRange {
                parameter: ParameterSlot::First,
                ..
            }
        ));
        assert_eq!(error.to_string(), "sphere parameter 1 must be at least 2, got 0");
    }

    #[test]
    fn cube_ignores_second_parameter() {
        let shape = ShapeParameters::new(ShapeKind::Cube, 3, 0).validate();

        assert_eq!(shape, Ok(Shape::Cube { subdivisions: 3 }));
    }

    #[test]
    fn tessellation_matches_predicted_triangle_count() {
        let noise = NoiseField::new();

        for kind in ShapeKind::ALL {
            for (param1, param2) in [(2, 3), (3, 5), (5, 8)] {
                let shape = ShapeParameters::new(kind, param1, param2)
                    .validate()
                    .unwrap();
                let buffer = shape.tessellate(&noise);

                assert_eq!(buffer.triangle_count(), shape.triangle_count(), "{kind}");
                assert_eq!(buffer.len() % buffer.layout().floats_per_triangle(), 0);
                assert_eq!(shape.kind(), kind);
            }
        }
    }
}
