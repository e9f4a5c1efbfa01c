use glam::Vec2;

use super::NoiseLookupTable;

/// Deterministic 2D gradient noise over an infinite lattice.
///
/// Each integer lattice point owns a gradient from a [`NoiseLookupTable`].
/// A sample blends the four surrounding corner contributions with a smoothstep
/// ease curve, which makes the field continuous everywhere.
#[derive(Clone, Debug, Default)]
pub struct NoiseField {
    table: NoiseLookupTable,
}

impl NoiseField {
    /// Octave frequencies summed by [`height`](Self::height). Each octave's
    /// amplitude is the reciprocal of its frequency.
    pub const OCTAVES: [f32; 4] = [8.0, 16.0, 32.0, 64.0];

    /// Creates a noise field over a freshly seeded lookup table.
    pub fn new() -> Self {
        Self {
            table: NoiseLookupTable::new(),
        }
    }

    /// The gradient table backing this field.
    pub fn table(&self) -> &NoiseLookupTable {
        &self.table
    }

    /// Samples a single octave of gradient noise at `(x, y)`.
    pub fn sample_height(&self, x: f32, y: f32) -> f32 {
        let cell_x = x.floor();
        let cell_y = y.floor();
        let (row, col) = (cell_x as i32, cell_y as i32);

        let point = Vec2::new(x, y);
        let corner = |dr: i32, dc: i32| {
            let lattice = Vec2::new(cell_x + dr as f32, cell_y + dc as f32);
            let gradient = self.table.gradient(row.wrapping_add(dr), col.wrapping_add(dc));
            (point - lattice).dot(gradient)
        };

        let bottom_left = corner(0, 0);
        let bottom_right = corner(1, 0);
        let top_left = corner(0, 1);
        let top_right = corner(1, 1);

        // Both rows blend along x with the same fraction.
        let blend_x = x - cell_x;
        let bottom = interpolate(bottom_left, bottom_right, blend_x);
        let top = interpolate(top_left, top_right, blend_x);

        interpolate(bottom, top, y - cell_y)
    }

    /// Fractal height at normalized coordinates `(x, y)`: the sum of
    /// [`OCTAVES`](Self::OCTAVES) samples, each octave doubling the frequency
    /// and halving the amplitude of the previous one.
    pub fn height(&self, x: f32, y: f32) -> f32 {
        Self::OCTAVES
            .iter()
            .map(|frequency| self.sample_height(x * frequency, y * frequency) / frequency)
            .sum()
    }
}

/// Smoothstep ease curve `3t² - 2t³`.
pub fn ease(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Blends `a` towards `b` by the eased fraction `alpha`.
pub fn interpolate(a: f32, b: f32, alpha: f32) -> f32 {
    a + ease(alpha) * (b - a)
}
