// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Frontier-driven gasket generator.
//!
//! The generator owns two pieces of state:
//!
//! - the **gasket**: the append-only list of accepted circles, starting
//!   with the three seeds; and
//! - the **frontier**: the tangent triples not yet expanded.
//!
//! One call to [`GasketGenerator::step_generation`] is one breadth-first
//! generation: every frontier triple is run through the Descartes solver,
//! candidates are validated against the gasket, and each accepted circle
//! contributes three child triples to the next frontier. The next frontier
//! is built into a fresh vector and swapped in at the end of the step, so
//! the frontier is never mutated while it is being walked.
//!
//! Generation converges when a step leaves the frontier the same size it
//! started (in the common case, both empty). After that the generator is
//! in its terminal phase and further steps report zero growth.
//!
//! Randomness is consumed only during initialization; everything after
//! the seed triple is deterministic.

pub mod errors;

pub use errors::InitializationError;

use rand::Rng;

use crate::config::{GasketConfig, MIN_SEED_RADIUS};
use crate::descartes;
use crate::geometry::{Circle, Complex, Triple};
use crate::statistics::{Counters, Statistics};
use crate::validate;

/// Where the generator is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Seed circles are being constructed. Only ever observable inside
    /// [`GasketGenerator::initialize`]; a constructed generator has moved on.
    Initializing,
    /// Frontier expansion is in progress.
    Expanding,
    /// Terminal: no further circles will ever be produced.
    Converged,
}

/// Outcome of one generation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationResult {
    /// Circles accepted during this step.
    pub new_circles: usize,
    /// Triples awaiting expansion after this step.
    pub frontier_len: usize,
    /// Whether the generator has reached its terminal phase.
    pub converged: bool,
}

/// Generates an Apollonian gasket by repeated frontier expansion.
///
/// Built once with [`initialize`](GasketGenerator::initialize), then
/// stepped by an external driver until [`GenerationResult::converged`]
/// is observed. The accumulated circles are readable at any point via
/// [`circles`](GasketGenerator::circles); the list only ever grows.
#[derive(Debug)]
pub struct GasketGenerator {
    circles: Vec<Circle>,
    frontier: Vec<Triple>,
    config: GasketConfig,
    phase: Phase,
    statistics: Statistics,
}

impl GasketGenerator {
    /// Seed a generator for a bounding region of the given dimensions.
    ///
    /// The outer circle has bend `-1/R` for `R = min(width, height) / 2`
    /// and sits at the region's center. The second circle gets a random
    /// radius in `[MIN_SEED_RADIUS, R/2]` and a random direction from the
    /// center; the third fills the remaining gap on the opposite side, so
    /// all three are mutually tangent. This is the only point where `rng`
    /// is consumed.
    ///
    /// # Errors
    ///
    /// [`InitializationError`] if the dimensions are non-positive or
    /// non-finite, or too small to fit a seed circle. A
    /// [`DegenerateSeed`](InitializationError::DegenerateSeed) failure is
    /// worth retrying with fresh randomness.
    pub fn initialize<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        rng: &mut R,
        config: GasketConfig,
    ) -> Result<GasketGenerator, InitializationError> {
        let mut generator = GasketGenerator {
            circles: Vec::new(),
            frontier: Vec::new(),
            config,
            phase: Phase::Initializing,
            statistics: Statistics::new(),
        };

        let [c1, c2, c3] = seed_circles(width, height, rng)?;
        generator.circles = vec![c1, c2, c3];
        generator.frontier = vec![Triple::new(c1, c2, c3)];
        generator.phase = Phase::Expanding;
        Ok(generator)
    }

    /// Run one breadth-first generation over the current frontier.
    ///
    /// Safe to call after convergence: the step is a no-op reporting
    /// `converged = true` and no growth.
    pub fn step_generation(&mut self) -> GenerationResult {
        if self.phase == Phase::Converged {
            return GenerationResult {
                new_circles: 0,
                frontier_len: self.frontier.len(),
                converged: true,
            };
        }

        let frontier = std::mem::take(&mut self.frontier);
        let mut next = Vec::new();
        let mut accepted = 0;

        for triple in &frontier {
            for candidate in descartes::candidates(triple) {
                self.statistics.increment(Counters::CandidatesProduced);
                let c4 = match candidate {
                    Ok(circle) => circle,
                    Err(_) => {
                        self.statistics.increment(Counters::DegenerateDiscards);
                        continue;
                    }
                };
                match validate::check(c4, triple, &self.circles, &self.config) {
                    Ok(()) => {
                        self.circles.push(c4);
                        next.extend(triple.successors(c4));
                        accepted += 1;
                        self.statistics.increment(Counters::CirclesAccepted);
                    }
                    Err(rejection) => self.statistics.record_rejection(rejection),
                }
            }
        }

        self.statistics.increment(Counters::Generations);

        let converged = next.len() == frontier.len();
        self.frontier = next;
        if converged {
            self.phase = Phase::Converged;
        }

        GenerationResult {
            new_circles: accepted,
            frontier_len: self.frontier.len(),
            converged,
        }
    }

    /// Step until converged; returns the number of circles accepted.
    ///
    /// Convenience for callers without a frame loop. Termination is
    /// guaranteed by the radius floor: each generation's circles must fit
    /// disjointly inside the outer circle, so only finitely many circles
    /// of radius `>= min_radius` can ever be accepted.
    pub fn run_to_convergence(&mut self) -> usize {
        let mut total = 0;
        loop {
            let result = self.step_generation();
            total += result.new_circles;
            if result.converged {
                return total;
            }
        }
    }

    /// Every circle produced so far, in acceptance order, the three seeds
    /// first. The slice is a read-only view; iterating it never disturbs
    /// generation.
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Number of triples awaiting expansion.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn config(&self) -> &GasketConfig {
        &self.config
    }
}

/// Construct the three mutually tangent seed circles.
///
/// `c1` encloses the packing (negative bend). `c2` sits a random distance
/// along a random direction, internally tangent to `c1`. With `r3 = R - r2`,
/// `c3` is placed along the opposite direction at distance `R - r3 = r2`,
/// which makes it tangent to both: the three centers are collinear with
/// `|center2 - center3| = r2 + r3`.
fn seed_circles<R: Rng + ?Sized>(
    width: f64,
    height: f64,
    rng: &mut R,
) -> Result<[Circle; 3], InitializationError> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(InitializationError::InvalidDimensions { width, height });
    }

    let outer_radius = width.min(height) / 2.0;
    let center = Complex::new(width / 2.0, height / 2.0);

    let r2_max = outer_radius / 2.0;
    if r2_max < MIN_SEED_RADIUS {
        return Err(InitializationError::BoundsTooSmall {
            outer_radius,
            min_seed_radius: MIN_SEED_RADIUS,
        });
    }

    let r2 = rng.gen_range(MIN_SEED_RADIUS..=r2_max);
    let angle = rng.gen_range(0.0..std::f64::consts::TAU);
    let direction = Complex::new(angle.cos(), angle.sin());

    let r3 = outer_radius - r2;
    if r3 <= 0.0 {
        return Err(InitializationError::DegenerateSeed { r2, r3 });
    }

    let center2 = center + direction.scale(outer_radius - r2);
    let center3 = center - direction.scale(outer_radius - r3);

    let degenerate = |_| InitializationError::DegenerateSeed { r2, r3 };
    let c1 = Circle::new(-1.0 / outer_radius, center).map_err(degenerate)?;
    let c2 = Circle::new(1.0 / r2, center2).map_err(degenerate)?;
    let c3 = Circle::new(1.0 / r3, center3).map_err(degenerate)?;

    Ok([c1, c2, c3])
}
