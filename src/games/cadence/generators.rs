//! Random sequences feeding the note scheduler.
//!
//! Lane assignment uses a shuffled bag so every lane comes up equally often
//! within each cycle; spawn gaps are independent uniform draws.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::LANES;

/// Shuffle-without-replacement lane generator.
///
/// Holds `LANES * repetitions` lane indices; once the bag runs dry it is
/// reshuffled and dealt again. Any window of one full cycle therefore
/// contains each lane exactly `repetitions` times.
#[derive(Debug, Clone)]
pub struct LaneBag {
    order: Vec<usize>,
    next: usize,
}

impl LaneBag {
    /// Create a bag with `repetitions` copies of each lane.
    pub fn new(repetitions: usize) -> Self {
        let order: Vec<usize> = (0..LANES).cycle().take(LANES * repetitions.max(1)).collect();
        // Start exhausted so the first draw shuffles.
        let next = order.len();
        Self { order, next }
    }

    /// Number of draws per cycle.
    pub fn cycle_len(&self) -> usize {
        self.order.len()
    }

    /// Draw the next lane, reshuffling when the bag is exhausted.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> usize {
        if self.next >= self.order.len() {
            self.order.shuffle(rng);
            self.next = 0;
        }
        let lane = self.order[self.next];
        self.next += 1;
        lane
    }
}

/// Draw a spawn gap in milliseconds from the inclusive `[min, max]` range.
pub fn draw_spawn_gap<R: Rng>(range_ms: (u64, u64), rng: &mut R) -> u64 {
    let (min, max) = range_ms;
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_single_repetition_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut bag = LaneBag::new(1);
        let mut drawn: Vec<usize> = (0..LANES).map(|_| bag.draw(&mut rng)).collect();
        drawn.sort_unstable();
        assert_eq!(drawn, vec![0, 1, 2]);
    }

    #[test]
    fn test_every_cycle_is_balanced() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for repetitions in 1..=4 {
            let mut bag = LaneBag::new(repetitions);
            let cycle = bag.cycle_len();
            assert_eq!(cycle, LANES * repetitions);

            // Ten consecutive cycles, each must contain every lane equally.
            for _ in 0..10 {
                let mut counts = [0usize; LANES];
                for _ in 0..cycle {
                    counts[bag.draw(&mut rng)] += 1;
                }
                assert_eq!(counts, [repetitions; LANES]);
            }
        }
    }

    #[test]
    fn test_draws_stay_in_lane_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut bag = LaneBag::new(2);
        for _ in 0..100 {
            assert!(bag.draw(&mut rng) < LANES);
        }
    }

    #[test]
    fn test_zero_repetitions_clamped_to_one() {
        let bag = LaneBag::new(0);
        assert_eq!(bag.cycle_len(), LANES);
    }

    #[test]
    fn test_spawn_gap_within_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let gap = draw_spawn_gap((900, 1800), &mut rng);
            assert!((900..=1800).contains(&gap));
        }
    }

    #[test]
    fn test_spawn_gap_degenerate_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        assert_eq!(draw_spawn_gap((500, 500), &mut rng), 500);
        // Inverted range falls back to the lower bound rather than panicking.
        assert_eq!(draw_spawn_gap((700, 300), &mut rng), 700);
    }
}
