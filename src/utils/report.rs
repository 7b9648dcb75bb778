// Report rendering and the optional file persistence sink

use std::fs;
use std::io;
use std::path::Path;

use crate::models::{Scenario, Score, SearchResult};

/// Renders a search result as human-readable text: the waypoint names
/// in visiting order, the score, and an improvement delta when a
/// positive prior best score was beaten
pub fn render_report(
    scenario: &Scenario,
    result: &SearchResult,
    prior_best: Option<Score>,
) -> String {
    let mut report = String::from("Best Route:\n");
    for name in result.route.waypoint_names(scenario) {
        report.push_str(name);
        report.push('\n');
    }
    report.push_str(&format!("Score: {:.3}\n", result.score));

    if let Some(delta) = prior_best.and_then(|prior| result.improvement_over(prior)) {
        report.push_str(&format!("Improvement over prior best: -{:.3}\n", delta));
    }

    report
}

/// Writes a rendered report to a file. The caller surfaces a failure
/// to the operator; the in-memory result is unaffected either way.
pub fn write_report(path: impl AsRef<Path>, contents: &str) -> io::Result<()> {
    fs::write(path, contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Point, Route};

    fn sample_scenario() -> Scenario {
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
    fn test_render_report_lists_names_then_score() {
        let result = SearchResult {
            route: Route::new(vec![0, 1]),
            score: 10.0,
            examined: 2,
        };

        let report = render_report(&sample_scenario(), &result, None);

        assert_eq!(report, "Best Route:\nA\nB\nScore: 10.000\n");
    }

    #[test]
    fn test_render_report_with_improvement() {
        let result = SearchResult {
            route: Route::new(vec![0, 1]),
            score: 10.0,
            examined: 2,
        };

        let report = render_report(&sample_scenario(), &result, Some(12.0));

        assert!(report.ends_with("Improvement over prior best: -2.000\n"));
    }

    #[test]
    fn test_render_report_without_improvement_omits_delta() {
        let result = SearchResult {
            route: Route::new(vec![0, 1]),
            score: 10.0,
            examined: 2,
        };

        let report = render_report(&sample_scenario(), &result, Some(10.0));

        assert!(!report.contains("Improvement"));
    }

    #[test]
    fn test_write_report_fails_for_bad_path() {
        let err = write_report("no_such_dir/report.txt", "Best Route:\n").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
