// Synthetic scenario generation for tests and benchmarks

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Point, Scenario};

/// Generates a scenario with `waypoint_count` random waypoints inside
/// a +/-2000 unit cube. Seeded, so the same seed always produces the
/// same scenario.
pub fn random_scenario(waypoint_count: usize, seed: u64) -> Scenario {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut random_point = |name: String| {
        Point::new(
            name,
            rng.gen_range(-2000.0..2000.0),
            rng.gen_range(0.0..400.0),
            rng.gen_range(-2000.0..2000.0),
        )
    };

    let start = random_point("Start".to_string());
    let end = random_point("End".to_string());
    let waypoints = (1..=waypoint_count)
        .map(|i| random_point(format!("Waypoint {}", i)))
        .collect();

    Scenario::new(waypoints, start, end)
}
