// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutually tangent triples, the unit of frontier work.
//!
//! A triple holds three pairwise tangent circles. Expanding a triple may
//! produce new circles; each accepted circle spawns three child triples,
//! one per pair of parents.

use crate::geometry::Circle;

/// Three pairwise mutually tangent circles.
///
/// The triple is conceptually unordered; the stored order only determines
/// the order of the child triples from [`Triple::successors`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triple([Circle; 3]);

impl Triple {
    pub fn new(c1: Circle, c2: Circle, c3: Circle) -> Self {
        Triple([c1, c2, c3])
    }

    /// The three member circles.
    pub fn circles(&self) -> &[Circle; 3] {
        &self.0
    }

    /// The three child triples obtained by substituting `c4` for each
    /// member in turn: `(c1, c2, c4)`, `(c1, c3, c4)`, `(c2, c3, c4)`.
    pub fn successors(&self, c4: Circle) -> [Triple; 3] {
        let [c1, c2, c3] = self.0;
        [
            Triple([c1, c2, c4]),
            Triple([c1, c3, c4]),
            Triple([c2, c3, c4]),
        ]
    }
}
