// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Circle value type.
//!
//! A circle is stored as its bend (signed curvature, the reciprocal of the
//! radius) and its center. The radius is derived on read; it is a single
//! division and absolute value, so no cache is kept.
//!
//! # Bend sign
//!
//! A positive bend is an ordinary circle. A negative bend marks a circle
//! whose interior is "outside" in tangency terms: the enclosing outer
//! circle of the packing. A zero bend would be a straight line, which
//! cannot arise from a valid tangent triple, so it is excluded by
//! construction.

use std::fmt;

use crate::geometry::Complex;

/// A circle of the packing: signed curvature plus center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    bend: f64,
    center: Complex,
}

/// A candidate circle whose curvature or center is unusable.
///
/// Raised when a bend of zero (a straight line) or a non-finite bend or
/// center comes out of the solver. Callers discard the candidate and move
/// on; this never propagates out of the crate's public operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DegenerateCurvature {
    /// Bend is exactly zero: the "circle" is a straight line.
    ZeroBend,
    /// Bend is NaN or infinite.
    NonFiniteBend { bend: f64 },
    /// Center has a NaN or infinite component.
    NonFiniteCenter { a: f64, b: f64 },
}

impl fmt::Display for DegenerateCurvature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateCurvature::ZeroBend => {
                write!(f, "zero bend describes a line, not a circle")
            }
            DegenerateCurvature::NonFiniteBend { bend } => {
                write!(f, "non-finite bend {}", bend)
            }
            DegenerateCurvature::NonFiniteCenter { a, b } => {
                write!(f, "non-finite center ({}, {})", a, b)
            }
        }
    }
}

impl std::error::Error for DegenerateCurvature {}

impl Circle {
    /// Create a circle from its bend and center.
    ///
    /// Fails if the bend is zero or non-finite, or the center is
    /// non-finite. This is the only constructor, so every `Circle` in
    /// existence has a well-defined radius.
    pub fn new(bend: f64, center: Complex) -> Result<Circle, DegenerateCurvature> {
        if !bend.is_finite() {
            return Err(DegenerateCurvature::NonFiniteBend { bend });
        }
        if bend == 0.0 {
            return Err(DegenerateCurvature::ZeroBend);
        }
        if !center.is_finite() {
            return Err(DegenerateCurvature::NonFiniteCenter {
                a: center.a,
                b: center.b,
            });
        }
        Ok(Circle { bend, center })
    }

    /// Signed curvature.
    pub fn bend(self) -> f64 {
        self.bend
    }

    /// Center point.
    pub fn center(self) -> Complex {
        self.center
    }

    /// Radius, derived from the bend: `|1 / bend|`.
    pub fn radius(self) -> f64 {
        (1.0 / self.bend).abs()
    }

    /// Distance between the two centers.
    pub fn dist(self, other: Circle) -> f64 {
        self.center.dist(other.center)
    }

    /// Whether this circle touches `other` at exactly one point, within
    /// tolerance.
    ///
    /// Two circles are externally tangent when the center distance equals
    /// the sum of the radii, and internally tangent when it equals the
    /// absolute difference of the radii. Either counts.
    pub fn is_tangent(self, other: Circle, epsilon: f64) -> bool {
        let d = self.dist(other);
        let r1 = self.radius();
        let r2 = other.radius();
        (d - (r1 + r2)).abs() < epsilon || (d - (r2 - r1).abs()).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(bend: f64, a: f64, b: f64) -> Circle {
        Circle::new(bend, Complex::new(a, b)).unwrap()
    }

    #[test]
    fn test_radius_is_reciprocal_of_bend() {
        assert_eq!(circle(0.5, 0.0, 0.0).radius(), 2.0);
        assert_eq!(circle(4.0, 1.0, 1.0).radius(), 0.25);
    }

    #[test]
    fn test_negative_bend_has_positive_radius() {
        let outer = circle(-1.0 / 400.0, 400.0, 400.0);
        assert_eq!(outer.radius(), 400.0);
        assert!(outer.bend() < 0.0);
    }

    #[test]
    fn test_zero_bend_rejected() {
        assert_eq!(
            Circle::new(0.0, Complex::ZERO),
            Err(DegenerateCurvature::ZeroBend)
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Circle::new(f64::NAN, Complex::ZERO).is_err());
        assert!(Circle::new(f64::INFINITY, Complex::ZERO).is_err());
        assert!(Circle::new(1.0, Complex::new(f64::NAN, 0.0)).is_err());
        assert!(Circle::new(1.0, Complex::new(0.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_dist() {
        let p = circle(1.0, 0.0, 0.0);
        let q = circle(1.0, 3.0, 4.0);
        assert!((p.dist(q) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_external_tangency() {
        // Two unit circles touching at the origin's right.
        let p = circle(1.0, 0.0, 0.0);
        let q = circle(1.0, 2.0, 0.0);
        assert!(p.is_tangent(q, 0.1));
        assert!(q.is_tangent(p, 0.1));
    }

    #[test]
    fn test_internal_tangency() {
        // Unit circle inside a radius-2 circle, touching at (2, 0).
        let outer = circle(-0.5, 0.0, 0.0);
        let inner = circle(1.0, 1.0, 0.0);
        assert!(outer.is_tangent(inner, 0.1));
    }

    #[test]
    fn test_not_tangent() {
        let p = circle(1.0, 0.0, 0.0);
        let far = circle(1.0, 10.0, 0.0);
        let overlapping = circle(1.0, 0.5, 0.0);
        assert!(!p.is_tangent(far, 0.1));
        assert!(!p.is_tangent(overlapping, 0.1));
    }
}
