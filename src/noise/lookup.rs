use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// Fixed table of pseudo-random 2D gradients shared by every lattice point of
/// a [`NoiseField`](super::NoiseField).
///
/// The table is seeded with a constant, so two tables built by the same
/// version of this crate are bit-identical.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseLookupTable {
    gradients: Vec<Vec2>,
}

impl NoiseLookupTable {
    /// Number of gradients in the table.
    pub const SIZE: usize = 1024;
    /// Seed of the gradient generator.
    pub const SEED: u64 = 1230;

    /// Builds the table from the fixed seed. Every gradient component is
    /// drawn uniformly from `[-1, 1]`, so gradients are not unit length.
    pub fn new() -> Self {
        let mut rng = Pcg64Mcg::seed_from_u64(Self::SEED);

        let gradients = (0..Self::SIZE)
            .map(|_| {
                Vec2::new(
                    rng.random_range(-1.0..=1.0),
                    rng.random_range(-1.0..=1.0),
                )
            })
            .collect();

        Self { gradients }
    }

    /// Index of the gradient assigned to lattice point `(row, col)`.
    ///
    /// The lattice coordinates are mixed as `row * 41 + col * 43` and reduced
    /// modulo the table size. Negative coordinates wrap into range, which
    /// matches reducing the two's complement bit pattern of the mix.
    pub fn index(row: i32, col: i32) -> usize {
        let mixed = row.wrapping_mul(41).wrapping_add(col.wrapping_mul(43));

        mixed.rem_euclid(Self::SIZE as i32) as usize
    }

    /// Returns the gradient of lattice point `(row, col)`.
    pub fn gradient(&self, row: i32, col: i32) -> Vec2 {
        self.gradients[Self::index(row, col)]
    }

    /// All gradients, in table order.
    pub fn gradients(&self) -> &[Vec2] {
        &self.gradients
    }
}

impl Default for NoiseLookupTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_fixed_size() {
        assert_eq!(NoiseLookupTable::new().gradients().len(), 1024);
    }

    #[test]
    fn tables_are_bit_identical() {
        let a = NoiseLookupTable::new();
        let b = NoiseLookupTable::new();

        for (ga, gb) in a.gradients().iter().zip(b.gradients()) {
            assert_eq!(ga.x.to_bits(), gb.x.to_bits());
            assert_eq!(ga.y.to_bits(), gb.y.to_bits());
        }
    }

    #[test]
    fn gradient_components_stay_in_unit_range() {
        for g in NoiseLookupTable::new().gradients() {
            assert!((-1.0..=1.0).contains(&g.x));
            assert!((-1.0..=1.0).contains(&g.y));
        }
    }

    #[test]
    fn index_follows_mixing_formula() {
        assert_eq!(NoiseLookupTable::index(0, 0), 0);
        assert_eq!(NoiseLookupTable::index(1, 0), 41);
        assert_eq!(NoiseLookupTable::index(0, 1), 43);
        assert_eq!(NoiseLookupTable::index(10, 20), (410 + 860) % 1024);
    }

    #[test]
    fn negative_lattice_points_wrap_into_table() {
        assert_eq!(NoiseLookupTable::index(-1, 0), 1024 - 41);
        assert_eq!(NoiseLookupTable::index(0, -1), 1024 - 43);
        assert!(NoiseLookupTable::index(i32::MIN, i32::MAX) < 1024);
    }
}
