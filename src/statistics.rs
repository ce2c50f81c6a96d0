// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generation statistics.
//!
//! Counters live in a flat array indexed by enum discriminant, with the
//! rejection reasons appended after the plain counters. Roughly half of
//! all candidates fail validation by construction (the solver emits every
//! bend/center pairing), so the rejection counts are how that expected
//! attrition stays observable.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

use crate::validate::Rejection;

#[derive(Debug, EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Candidate circles produced by the solver.
    CandidatesProduced,
    /// Candidates that passed validation and joined the gasket.
    CirclesAccepted,
    /// Candidates discarded for a zero or non-finite bend or center.
    DegenerateDiscards,
    /// Completed generation steps.
    Generations,
}

const COUNT: usize = Counters::COUNT + Rejection::COUNT;

/// Counter storage for one generator.
#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Record one rejected candidate under its reason.
    pub(crate) fn record_rejection(&mut self, rejection: Rejection) {
        self.stats[Counters::COUNT + rejection as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Get the number of candidates rejected for the given reason.
    pub fn rejections(&self, rejection: Rejection) -> u64 {
        self.stats[Counters::COUNT + rejection as usize]
    }

    /// Total rejected candidates across all reasons.
    pub fn total_rejections(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }
}
