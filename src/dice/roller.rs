use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait Roller {
    /// Returns a uniformly distributed value in `1..=max`.
    fn roll_in_range(&mut self, max: u32) -> u32;
}

pub struct ThreadRngRoller {
    rng: rand::rngs::ThreadRng,
}

impl ThreadRngRoller {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for ThreadRngRoller {
    fn default() -> Self {
        Self::new()
    }
}

impl Roller for ThreadRngRoller {
    fn roll_in_range(&mut self, max: u32) -> u32 {
        self.rng.random_range(1..=max)
    }
}

/// Deterministic roller, same seed gives the same sequence.
pub struct SeededRoller {
    rng: StdRng,
}

impl SeededRoller {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Roller for SeededRoller {
    fn roll_in_range(&mut self, max: u32) -> u32 {
        self.rng.random_range(1..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_roller_roll_in_range() {
        let mut roller = ThreadRngRoller::new();

        for _ in 0..100 {
            let roll = roller.roll_in_range(10);
            assert!((1..=10).contains(&roll));
        }

        // max of 1 can only ever give 1
        let mut roller = ThreadRngRoller::new();
        assert_eq!(roller.roll_in_range(1), 1);
    }

    #[test]
    fn test_seeded_roller_is_reproducible() {
        let mut a = SeededRoller::new(1234);
        let mut b = SeededRoller::new(1234);

        let left: Vec<u32> = (0..50).map(|_| a.roll_in_range(20)).collect();
        let right: Vec<u32> = (0..50).map(|_| b.roll_in_range(20)).collect();

        assert_eq!(left, right);
        assert!(left.iter().all(|r| (1..=20).contains(r)));
    }
}
