//! Random sources used by the failure-injection endpoints

use faultline_interfaces::RandomSource;
use std::sync::Mutex;

/// Thread-safe wrapper around a `fastrand` generator
#[derive(Debug)]
pub struct FastrandSource {
    rng: Mutex<fastrand::Rng>,
}

impl FastrandSource {
    /// Generator seeded from the OS
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Generator with a reproducible sequence
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl Default for FastrandSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastrandSource {
    fn next_f64(&self) -> f64 {
        // A poisoned lock still holds a usable generator
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.f64()
    }
}

/// Source that returns the same draw forever
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandomSource(pub f64);

impl RandomSource for FixedRandomSource {
    fn next_f64(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_stay_in_unit_interval() {
        let source = FastrandSource::new();
        for _ in 0..1_000 {
            let draw = source.next_f64();
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn test_seeded_sources_repeat() {
        let a = FastrandSource::with_seed(7);
        let b = FastrandSource::with_seed(7);
        for _ in 0..16 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn test_chance_boundaries() {
        let source = FastrandSource::with_seed(1);
        for _ in 0..1_000 {
            assert!(!source.chance(0.0));
            assert!(source.chance(1.0));
        }
    }

    #[test]
    fn test_fixed_source() {
        let source = FixedRandomSource(0.5);
        assert!(source.chance(0.7));
        assert!(!source.chance(0.3));
    }
}
