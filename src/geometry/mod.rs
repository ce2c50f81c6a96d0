// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for Apollonian gaskets.
//!
//! This module contains the value types the packing is built from:
//! - Complex: 2D point doubling as a complex number
//! - Circle: bend (signed curvature) plus center, radius derived
//! - Triple: three pairwise mutually tangent circles

pub mod circle;
pub mod complex;
pub mod triple;

// Re-export for convenience
pub use circle::{Circle, DegenerateCurvature};
pub use complex::Complex;
pub use triple::Triple;
