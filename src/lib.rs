// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Apollonian gasket generation.
//!
//! An Apollonian gasket is a packing of mutually tangent circles: three
//! tangent seed circles are expanded recursively, each tangent triple
//! yielding further circles via the Descartes circle theorem until no new
//! circle above a minimum radius can be produced.
//!
//! # Architecture
//!
//! Data flows one way through four layers:
//!
//! 1. **geometry** - `Complex` (2D point / complex number), `Circle`
//!    (bend + center, radius derived), and `Triple` (three pairwise
//!    tangent circles, the unit of frontier work).
//! 2. **descartes** - the real theorem gives the two possible bends of a
//!    fourth tangent circle; the complex theorem gives the centers. Four
//!    candidates are produced per triple (2 bend roots x 2 center signs)
//!    because the correct pairing is not known in closed form.
//! 3. **validate** - tolerance rules reject candidates that are too
//!    small, duplicates of accepted circles, or not tangent to their
//!    parents. Rejection is the expected fate of roughly half of all
//!    candidates.
//! 4. **generator** - owns the gasket (append-only circle list) and the
//!    frontier (triples awaiting expansion); steps breadth-first until a
//!    generation produces no net frontier growth.
//!
//! Rendering, styling, and frame-loop driving are external concerns: the
//! crate consumes bounding dimensions and a randomness source at
//! initialization and exposes circle data, nothing more.
//!
//! # Example
//!
//! ```
//! use apollonian_gasket::{GasketConfig, GasketGenerator};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let mut generator =
//!     GasketGenerator::initialize(800.0, 800.0, &mut rng, GasketConfig::default()).unwrap();
//!
//! // An external driver (e.g. a render loop) would call one step per
//! // frame; here we just run until nothing more can be produced.
//! while !generator.step_generation().converged {}
//!
//! for circle in generator.circles() {
//!     let _ = (circle.center(), circle.radius());
//! }
//! ```

pub mod config;
pub mod descartes;
pub mod generator;
pub mod geometry;
pub mod statistics;
pub mod validate;

// Re-export commonly used types
pub use config::GasketConfig;
pub use generator::{GasketGenerator, GenerationResult, InitializationError, Phase};
pub use geometry::{Circle, Complex, DegenerateCurvature, Triple};
pub use statistics::{Counters, Statistics};
pub use validate::Rejection;
