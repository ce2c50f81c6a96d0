// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use apollonian_gasket::{GasketConfig, GasketGenerator};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Bounding dimension used by the integration tests.
pub const BOUNDS: f64 = 800.0;

/// Build a generator over an 800x800 region from a fixed seed, with the
/// default tolerances (epsilon 0.1, minimum radius 2).
pub fn seeded_generator(seed: u64) -> GasketGenerator {
    let mut rng = SmallRng::seed_from_u64(seed);
    GasketGenerator::initialize(BOUNDS, BOUNDS, &mut rng, GasketConfig::default())
        .expect("800x800 bounds are valid")
}
