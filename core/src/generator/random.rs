use super::*;
use ndarray::Array2;

/// Lights each cell independently with the configured chance. The seed is
/// explicit so the same seed and config always produce the same grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomGridGenerator {
    seed: u64,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, config: GameConfig) -> LightGrid {
        use rand::prelude::*;

        let chance = config.light_chance;

        // degenerate chances need no randomness
        if chance <= 0.0 {
            if chance < 0.0 {
                log::warn!("Light chance {} below zero, generated all-unlit", chance);
            }
            return LightGrid::from_light_mask(Array2::default(config.size.to_nd_index()));
        }
        if chance >= 1.0 {
            if chance > 1.0 {
                log::warn!("Light chance {} above one, generated all-lit", chance);
            }
            return LightGrid::from_light_mask(Array2::from_elem(
                config.size.to_nd_index(),
                true,
            ));
        }

        let mut lights: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        for cell in lights.iter_mut() {
            *cell = rng.random_bool(chance);
        }

        LightGrid::from_light_mask(lights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_chance_generates_all_unlit() {
        let config = GameConfig::new((7, 4), 0.0);
        let grid = RandomGridGenerator::new(1).generate(config);

        assert_eq!(grid.size(), (7, 4));
        assert_eq!(grid.lit_count(), 0);
        assert!(grid.all_unlit());
    }

    #[test]
    fn full_chance_generates_all_lit() {
        let config = GameConfig::new((3, 6), 1.0);
        let grid = RandomGridGenerator::new(1).generate(config);

        assert_eq!(grid.lit_count(), grid.total_cells());
    }

    #[test]
    fn same_seed_generates_the_same_grid() {
        let config = GameConfig::new((16, 16), 0.25);

        let first = RandomGridGenerator::new(0x5eed).generate(config);
        let second = RandomGridGenerator::new(0x5eed).generate(config);

        assert_eq!(first, second);
    }

    #[test]
    fn generated_grid_matches_the_configured_size() {
        let config = GameConfig::new((9, 2), 0.5);
        let grid = RandomGridGenerator::new(42).generate(config);

        assert_eq!(grid.size(), (9, 2));
        assert_eq!(grid.total_cells(), 18);
        assert!(grid.lit_count() <= grid.total_cells());
    }
}
