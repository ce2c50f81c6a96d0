// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end properties of a fully generated gasket.

mod common;

use apollonian_gasket::{Counters, GasketGenerator, Phase};
use common::seeded_generator;

/// Generous upper bound on generation steps; convergence is expected far
/// sooner (the radius floor caps the recursion depth).
const MAX_STEPS: usize = 200;

fn run_to_convergence(generator: &mut GasketGenerator) {
    for _ in 0..MAX_STEPS {
        if generator.step_generation().converged {
            return;
        }
    }
    panic!("no convergence within {} steps", MAX_STEPS);
}

#[test]
fn test_terminates_and_reports_converged_phase() {
    let mut generator = seeded_generator(42);
    run_to_convergence(&mut generator);
    assert_eq!(generator.phase(), Phase::Converged);
    assert_eq!(generator.frontier_len(), 0);
}

#[test]
fn test_gasket_growth_is_monotonic() {
    let mut generator = seeded_generator(42);
    let mut previous = generator.circles().len();
    for _ in 0..MAX_STEPS {
        let result = generator.step_generation();
        let current = generator.circles().len();
        assert!(current >= previous);
        assert_eq!(current, previous + result.new_circles);
        previous = current;
        if result.converged {
            break;
        }
    }
    // The seed triple always spawns descendants at these tolerances.
    assert!(previous > 3);
}

#[test]
fn test_no_duplicate_circles() {
    let mut generator = seeded_generator(42);
    run_to_convergence(&mut generator);

    let epsilon = generator.config().epsilon;
    let circles = generator.circles();
    for (i, x) in circles.iter().enumerate() {
        for y in &circles[i + 1..] {
            let same_center = x.dist(*y) < epsilon;
            let same_radius = (x.radius() - y.radius()).abs() < epsilon;
            assert!(
                !(same_center && same_radius),
                "duplicate circles at {:?} and {:?}",
                x,
                y
            );
        }
    }
}

#[test]
fn test_minimum_radius_floor() {
    let mut generator = seeded_generator(42);
    run_to_convergence(&mut generator);

    let min_radius = generator.config().min_radius;
    // The enclosing circle is exempt; everything else obeys the floor.
    for circle in &generator.circles()[1..] {
        assert!(
            circle.radius() >= min_radius,
            "circle {:?} below radius floor",
            circle
        );
    }
}

#[test]
fn test_tangency_closure() {
    let mut generator = seeded_generator(42);
    run_to_convergence(&mut generator);

    let epsilon = generator.config().epsilon;
    let circles = generator.circles();
    // Every non-seed circle was accepted against a triple, so it must
    // touch at least three others.
    for (i, circle) in circles.iter().enumerate().skip(3) {
        let tangent_count = circles
            .iter()
            .enumerate()
            .filter(|(j, other)| *j != i && circle.is_tangent(**other, epsilon))
            .count();
        assert!(
            tangent_count >= 3,
            "circle {:?} tangent to only {} others",
            circle,
            tangent_count
        );
    }
}

#[test]
fn test_statistics_account_for_every_candidate() {
    let mut generator = seeded_generator(42);
    run_to_convergence(&mut generator);

    let stats = generator.statistics();
    let produced = stats.get(Counters::CandidatesProduced);
    let accepted = stats.get(Counters::CirclesAccepted);
    let degenerate = stats.get(Counters::DegenerateDiscards);
    assert_eq!(produced, accepted + degenerate + stats.total_rejections());
    assert_eq!(accepted as usize, generator.circles().len() - 3);
    assert!(stats.get(Counters::Generations) >= 1);
}
