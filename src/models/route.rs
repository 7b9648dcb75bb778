// Route models for representing waypoint visiting orders

use crate::models::{Scenario, Score, WaypointIndex};

/// One specific visiting order of all waypoints between the fixed
/// start and end points. Stops are indices into the scenario's
/// waypoint list; names are resolved only for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Visiting order as waypoint indices
    pub stops: Vec<WaypointIndex>,
}

impl Route {
    /// Creates a new route from a visiting order
    pub fn new(stops: Vec<WaypointIndex>) -> Self {
        Self { stops }
    }

    /// Resolves the visiting order to waypoint names for display
    pub fn waypoint_names<'a>(&self, scenario: &'a Scenario) -> Vec<&'a str> {
        self.stops
            .iter()
            .map(|&i| scenario.waypoints[i].name.as_str())
            .collect()
    }
}

/// The best route found by a search, with its score and how many
/// candidate orders were examined to find it
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best (lowest-score) visiting order found
    pub route: Route,

    /// Total Euclidean path length of the best route,
    /// including the start and end legs
    pub score: Score,

    /// Number of candidate orders scored during the search
    pub examined: u64,
}

impl SearchResult {
    /// Improvement over a prior best score, if this result beats it
    pub fn improvement_over(&self, prior_best: Score) -> Option<Score> {
        if prior_best > 0.0 && self.score < prior_best {
            Some(prior_best - self.score)
        } else {
            None
        }
    }
}
