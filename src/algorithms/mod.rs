pub mod brute_force;

// Common algorithm traits
use crate::models::{Scenario, Score, SearchResult, WaypointIndex};

/// Trait for waypoint route solvers
pub trait RouteSolver {
    /// Find the lowest-score visiting order of the scenario's
    /// waypoints, examining at most `max_iterations` candidates.
    /// A positive `prior_best` must be strictly beaten for a result
    /// to be returned; `None` means nothing was examined or nothing
    /// improved on the prior.
    fn solve(
        &self,
        scenario: &Scenario,
        max_iterations: u64,
        prior_best: Option<Score>,
    ) -> Option<SearchResult>;

    /// Score one visiting order: total path length from start through
    /// every waypoint in order to end
    fn score_route(&self, scenario: &Scenario, order: &[WaypointIndex]) -> Score;
}
