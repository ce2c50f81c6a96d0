// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for gasket initialization.

use std::fmt;

/// Errors that can occur while seeding the initial tangent triple.
///
/// These are the only errors the generator ever surfaces. `DegenerateSeed`
/// depends on the random draw, so a caller may simply retry with fresh
/// randomness; the other variants are caller mistakes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitializationError {
    /// Bounding dimensions must be positive and finite.
    InvalidDimensions { width: f64, height: f64 },

    /// The bounding region is too small to place the second seed circle:
    /// its radius range `[min_seed_radius, outer_radius / 2]` is empty.
    BoundsTooSmall {
        outer_radius: f64,
        min_seed_radius: f64,
    },

    /// The random draw produced a non-positive third seed radius.
    DegenerateSeed { r2: f64, r3: f64 },
}

impl fmt::Display for InitializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitializationError::InvalidDimensions { width, height } => {
                write!(f, "invalid bounding dimensions {}x{}", width, height)
            }
            InitializationError::BoundsTooSmall {
                outer_radius,
                min_seed_radius,
            } => {
                write!(
                    f,
                    "outer radius {} leaves no room for a seed circle of radius >= {}",
                    outer_radius, min_seed_radius
                )
            }
            InitializationError::DegenerateSeed { r2, r3 } => {
                write!(
                    f,
                    "seed radii degenerate: r2 = {} gives non-positive r3 = {}",
                    r2, r3
                )
            }
        }
    }
}

impl std::error::Error for InitializationError {}
