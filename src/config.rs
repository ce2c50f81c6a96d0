// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tunable constants for gasket generation.
//!
//! The two tolerances govern every numeric comparison in the algorithm:
//! `epsilon` for tangency and distinctness tests, `min_radius` as the
//! recursion floor that makes the packing finite.

/// Default tolerance for tangency and duplicate detection, in length units.
pub const EPSILON: f64 = 0.1;

/// Default smallest radius worth keeping, in length units.
///
/// Without a floor the packing recurses forever; any positive value
/// guarantees termination.
pub const MIN_RADIUS: f64 = 2.0;

/// Smallest allowed radius for the randomly placed second seed circle.
///
/// The second seed is drawn uniformly from `[MIN_SEED_RADIUS, R/2]` where
/// `R` is the outer radius, so the bounding region must be at least
/// `4 * MIN_SEED_RADIUS` across.
pub const MIN_SEED_RADIUS: f64 = 100.0;

/// Runtime-tunable generation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasketConfig {
    /// Tolerance for tangency and duplicate detection.
    pub epsilon: f64,
    /// Candidates with a smaller radius are rejected.
    pub min_radius: f64,
}

impl Default for GasketConfig {
    fn default() -> Self {
        GasketConfig {
            epsilon: EPSILON,
            min_radius: MIN_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GasketConfig::default();
        assert_eq!(config.epsilon, 0.1);
        assert_eq!(config.min_radius, 2.0);
    }
}
