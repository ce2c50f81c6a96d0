// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate validation rules.
//!
//! The Descartes solver over-produces: it emits every bend/center pairing
//! and cannot tell a genuine new circle from a re-derivation of an old one.
//! This module applies the three acceptance rules, in order:
//!
//! 1. radius floor - the candidate is large enough to keep,
//! 2. distinctness - no already-accepted circle has the same center and
//!    radius within tolerance,
//! 3. tangency - the candidate touches each of its three parents.
//!
//! A rejection is a normal outcome, not an error; the reason is reported
//! so the generator can keep rejection counts.

use std::fmt;

use strum_macros::EnumCount as EnumCountMacro;

use crate::config::GasketConfig;
use crate::geometry::{Circle, Triple};

/// Why a candidate circle was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCountMacro)]
#[repr(u8)]
pub enum Rejection {
    /// Radius below the configured floor.
    BelowMinRadius,
    /// Same center and radius as an accepted circle, within tolerance.
    Duplicate,
    /// Not tangent to all three parent circles; a wrong bend/center
    /// pairing out of the solver.
    NotTangent,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::BelowMinRadius => write!(f, "radius below minimum"),
            Rejection::Duplicate => write!(f, "duplicate of an accepted circle"),
            Rejection::NotTangent => write!(f, "not tangent to all three parents"),
        }
    }
}

/// Accept or reject a candidate fourth circle for `triple`.
///
/// `gasket` is every circle accepted so far, including ones accepted
/// earlier in the same generation step; a candidate matching any of them
/// in both center and radius is a duplicate.
pub fn check(
    candidate: Circle,
    triple: &Triple,
    gasket: &[Circle],
    config: &GasketConfig,
) -> Result<(), Rejection> {
    if candidate.radius() < config.min_radius {
        return Err(Rejection::BelowMinRadius);
    }

    for other in gasket {
        let d = candidate.dist(*other);
        let radius_diff = (candidate.radius() - other.radius()).abs();
        if d < config.epsilon && radius_diff < config.epsilon {
            return Err(Rejection::Duplicate);
        }
    }

    for parent in triple.circles() {
        if !candidate.is_tangent(*parent, config.epsilon) {
            return Err(Rejection::NotTangent);
        }
    }

    Ok(())
}
