// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The Descartes circle theorem and its complex extension.
//!
//! Given three mutually tangent circles with bends `k1, k2, k3`, the real
//! theorem gives the two possible bends of a fourth circle tangent to all
//! three. The complex theorem gives the matching centers, treating each
//! center as a complex number weighted by its bend.
//!
//! # Candidate count
//!
//! The theorem does not say which complex root sign belongs to which bend
//! root, so this module produces all four pairings (2 bends × 2 center
//! signs) and leaves it to validation to discard the wrong ones. Roughly
//! half of the candidates are expected to fail the tangency test; that is
//! inherent to the approach, not a defect.

use crate::geometry::{Circle, Complex, DegenerateCurvature, Triple};

/// The two possible bends of a fourth circle tangent to circles with
/// bends `k1`, `k2`, `k3`.
///
/// `k4 = k1 + k2 + k3 ± 2·sqrt(|k1·k2 + k2·k3 + k1·k3|)`.
pub fn curvatures(k1: f64, k2: f64, k3: f64) -> [f64; 2] {
    let sum = k1 + k2 + k3;
    let product = (k1 * k2 + k2 * k3 + k1 * k3).abs();
    let root = 2.0 * product.sqrt();
    [sum + root, sum - root]
}

/// All candidate fourth circles for a mutually tangent triple.
///
/// Returns exactly four entries: for each bend root, the centers
/// `(S + R) / k4` and `(S − R) / k4`, where `S` is the bend-weighted sum
/// of the parents' centers and `R` twice the principal square root of
/// their pairwise products. Entries whose bend or center is degenerate
/// (zero or non-finite) come back as `Err` so the caller can count the
/// discard; they carry no usable circle.
pub fn candidates(triple: &Triple) -> [Result<Circle, DegenerateCurvature>; 4] {
    let [c1, c2, c3] = *triple.circles();

    let k4 = curvatures(c1.bend(), c2.bend(), c3.bend());

    let zk1 = c1.center().scale(c1.bend());
    let zk2 = c2.center().scale(c2.bend());
    let zk3 = c3.center().scale(c3.bend());

    let sum = zk1 + zk2 + zk3;
    let root = (zk1 * zk2 + zk2 * zk3 + zk1 * zk3).sqrt().scale(2.0);

    let center = |k: f64, numerator: Complex| Circle::new(k, numerator.scale(1.0 / k));

    [
        center(k4[0], sum + root),
        center(k4[0], sum - root),
        center(k4[1], sum + root),
        center(k4[1], sum - root),
    ]
}
