//! Random source used by the fault-injection endpoints

/// Uniform random draws in `[0, 1)`
///
/// Every call is an independent trial. Implementations must be shareable
/// across request handlers.
pub trait RandomSource: Send + Sync {
    fn next_f64(&self) -> f64;

    /// One Bernoulli trial: true with the given probability
    ///
    /// Probabilities at or below zero never hit; at or above one always hit.
    fn chance(&self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(f64);

    impl RandomSource for Constant {
        fn next_f64(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_boundary_probabilities() {
        // The largest value below 1.0 still hits at probability one
        let high = Constant(1.0 - f64::EPSILON);
        assert!(high.chance(1.0));
        assert!(!high.chance(0.0));

        let low = Constant(0.0);
        assert!(!low.chance(0.0));
        assert!(low.chance(0.5));
    }
}
