// Exhaustive permutation search over waypoint visiting orders

use crate::algorithms::RouteSolver;
use crate::models::{Route, Scenario, Score, SearchResult, WaypointIndex};
use crate::utils::distance::euclidean_distance;
use crate::utils::permutation::next_permutation;

/// Brute-force route solver: enumerates waypoint orders index by index
/// in lexicographic next-permutation sequence, scores each, and keeps
/// the lowest-score order seen.
///
/// Score of an order p[0..n-1] is
/// `d(start, p[0]) + sum of d(p[i], p[i+1]) for i in 0..n-1 + d(p[n-1], end)`,
/// so every interior edge contributes exactly once alongside the two
/// fixed legs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSolver;

impl BruteForceSolver {
    pub fn new() -> Self {
        Self
    }

    /// Runs the search, invoking `observer` once per scored candidate
    /// with the order and its score. Enumeration starts at the identity
    /// order [0, 1, .., n-1] and stops when the permutation sequence
    /// wraps or `max_iterations` candidates have been scored.
    pub fn search_with_observer(
        &self,
        scenario: &Scenario,
        max_iterations: u64,
        prior_best: Option<Score>,
        observer: &mut dyn FnMut(&[WaypointIndex], Score),
    ) -> Option<SearchResult> {
        let n = scenario.waypoint_count();
        if n == 0 || max_iterations == 0 {
            return None;
        }

        let mut order: Vec<WaypointIndex> = (0..n).collect();
        // A positive prior best seeds the bar to beat; otherwise the
        // first candidate seeds it unconditionally
        let mut bar: Option<Score> = prior_best.filter(|s| *s > 0.0);
        let mut best: Option<(Vec<WaypointIndex>, Score)> = None;
        let mut examined: u64 = 0;

        loop {
            let score = self.score_route(scenario, &order);
            examined += 1;
            observer(&order, score);

            // Strictly-less-than only, so ties keep the earlier route
            let improved = match bar {
                None => true,
                Some(b) => score < b,
            };
            if improved {
                bar = Some(score);
                best = Some((order.clone(), score));
            }

            if examined == max_iterations || !next_permutation(&mut order) {
                break;
            }
        }

        best.map(|(stops, score)| SearchResult {
            route: Route::new(stops),
            score,
            examined,
        })
    }
}

impl RouteSolver for BruteForceSolver {
    fn solve(
        &self,
        scenario: &Scenario,
        max_iterations: u64,
        prior_best: Option<Score>,
    ) -> Option<SearchResult> {
        self.search_with_observer(scenario, max_iterations, prior_best, &mut |_, _| {})
    }

    fn score_route(&self, scenario: &Scenario, order: &[WaypointIndex]) -> Score {
        let waypoints = &scenario.waypoints;
        let mut score = euclidean_distance(&scenario.start, &waypoints[order[0]]);
        for pair in order.windows(2) {
            score += euclidean_distance(&waypoints[pair[0]], &waypoints[pair[1]]);
        }
        score + euclidean_distance(&waypoints[order[order.len() - 1]], &scenario.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn right_triangle_scenario() -> Scenario {
        // Legs 3 and 4, hypotenuse 5; [A, B] scores 3+4+3 = 10,
        // [B, A] scores 5+4+5 = 14
        Scenario::new(
            vec![
                Point::new("A", 3.0, 0.0, 0.0),
                Point::new("B", 3.0, 4.0, 0.0),
            ],
            Point::new("start", 0.0, 0.0, 0.0),
            Point::new("end", 0.0, 4.0, 0.0),
        )
    }

    #[test]
    fn test_selects_shorter_ordering() {
        let solver = BruteForceSolver::new();
        let scenario = right_triangle_scenario();

        let result = solver.solve(&scenario, 2, None).unwrap();

        assert_eq!(result.route.stops, vec![0, 1]);
        assert_eq!(result.score, 10.0);
        assert_eq!(result.examined, 2);
    }

    #[test]
    fn test_single_waypoint_score_is_both_legs() {
        let solver = BruteForceSolver::new();
        let scenario = Scenario::new(
            vec![Point::new("only", 3.0, 0.0, 0.0)],
            Point::new("start", 0.0, 0.0, 0.0),
            Point::new("end", 3.0, 4.0, 0.0),
        );

        let result = solver.solve(&scenario, 1, None).unwrap();

        assert_eq!(result.score, 3.0 + 4.0);
        assert_eq!(result.examined, 1);
    }

    #[test]
    fn test_empty_waypoints_yields_none() {
        let solver = BruteForceSolver::new();
        let scenario = Scenario::new(
            vec![],
            Point::new("start", 0.0, 0.0, 0.0),
            Point::new("end", 1.0, 0.0, 0.0),
        );

        assert_eq!(solver.solve(&scenario, 100, None), None);
    }

    #[test]
    fn test_zero_iterations_yields_none() {
        let solver = BruteForceSolver::new();

        assert_eq!(solver.solve(&right_triangle_scenario(), 0, None), None);
    }

    #[test]
    fn test_unbeaten_prior_best_yields_none() {
        let solver = BruteForceSolver::new();

        // Both orderings score 10 and 14; a prior of 9 beats them all
        assert_eq!(solver.solve(&right_triangle_scenario(), 2, Some(9.0)), None);
    }

    #[test]
    fn test_prior_best_tie_is_not_an_improvement() {
        let solver = BruteForceSolver::new();

        // The best ordering scores exactly 10; a tie must not count
        assert_eq!(
            solver.solve(&right_triangle_scenario(), 2, Some(10.0)),
            None
        );
    }

    #[test]
    fn test_beaten_prior_best_returns_candidate_score() {
        let solver = BruteForceSolver::new();

        let result = solver
            .solve(&right_triangle_scenario(), 2, Some(20.0))
            .unwrap();

        assert_eq!(result.route.stops, vec![0, 1]);
        assert_eq!(result.score, 10.0);
    }

    #[test]
    fn test_nonpositive_prior_best_is_ignored() {
        let solver = BruteForceSolver::new();

        let result = solver.solve(&right_triangle_scenario(), 2, Some(0.0)).unwrap();

        assert_eq!(result.score, 10.0);
    }
}
