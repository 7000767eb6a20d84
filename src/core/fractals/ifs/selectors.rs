use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::core::actions::ports::transform_selector::TransformSelector;

/// Cumulative-sum weighted draw backed by a PCG generator. Entropy-seeded
/// for normal stochastic rendering, or seeded explicitly for reproducible
/// chains.
#[derive(Debug)]
pub struct WeightedRandomSelector {
    rng: Pcg32,
}

impl WeightedRandomSelector {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl TransformSelector for WeightedRandomSelector {
    fn next_index(&mut self, cumulative: &[f64]) -> usize {
        let draw: f64 = self.rng.random();

        cumulative
            .iter()
            .position(|&threshold| draw < threshold)
            .unwrap_or(cumulative.len() - 1)
    }
}

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;

/// 32-bit linear congruential index source. Uniform over the transform
/// count (it ignores the weights), so it is only correct for equal-weight
/// systems; its value is bit-identical replay for a given seed.
#[derive(Debug)]
pub struct CongruentialSelector {
    state: u32,
}

impl CongruentialSelector {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl TransformSelector for CongruentialSelector {
    fn next_index(&mut self, cumulative: &[f64]) -> usize {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);

        self.state as usize % cumulative.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_draw_respects_probabilities() {
        let mut selector = WeightedRandomSelector::seeded(7);
        let cumulative = [0.1, 1.0];
        let mut counts = [0u32; 2];

        for _ in 0..10_000 {
            counts[selector.next_index(&cumulative)] += 1;
        }

        // ~10% of draws should pick the first transform
        assert!(counts[0] > 500 && counts[0] < 1_500);
        assert_eq!(counts[0] + counts[1], 10_000);
    }

    #[test]
    fn test_weighted_draw_never_exceeds_table() {
        let mut selector = WeightedRandomSelector::seeded(11);
        let cumulative = [0.25, 0.5, 1.0];

        for _ in 0..1_000 {
            assert!(selector.next_index(&cumulative) < cumulative.len());
        }
    }

    #[test]
    fn test_seeded_draws_are_reproducible() {
        let cumulative = [1.0 / 3.0, 2.0 / 3.0, 1.0];

        let mut first = WeightedRandomSelector::seeded(42);
        let mut second = WeightedRandomSelector::seeded(42);

        for _ in 0..100 {
            assert_eq!(
                first.next_index(&cumulative),
                second.next_index(&cumulative)
            );
        }
    }

    #[test]
    fn test_congruential_sequence_matches_recurrence() {
        let mut selector = CongruentialSelector::new(42);
        let cumulative = [1.0 / 3.0, 2.0 / 3.0, 1.0];

        let mut state: u32 = 42;
        for _ in 0..20 {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let expected = state as usize % 3;

            assert_eq!(selector.next_index(&cumulative), expected);
        }
    }

    #[test]
    fn test_congruential_same_seed_same_sequence() {
        let cumulative = [0.5, 1.0];
        let mut first = CongruentialSelector::new(1234);
        let mut second = CongruentialSelector::new(1234);

        for _ in 0..50 {
            assert_eq!(
                first.next_index(&cumulative),
                second.next_index(&cumulative)
            );
        }
    }
}
