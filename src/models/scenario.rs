// Scenario model - the immutable configuration for one search

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::models::Point;

/// The full input to a route search: the waypoint set whose visiting
/// order is being optimized, plus the fixed start and end points.
/// Constructed once and passed by reference; never process-wide state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Interior points whose visiting order is the search variable
    pub waypoints: Vec<Point>,

    /// Fixed starting point, never reordered
    pub start: Point,

    /// Fixed ending point, never reordered
    pub end: Point,
}

impl Scenario {
    /// Creates a new scenario from parts
    pub fn new(waypoints: Vec<Point>, start: Point, end: Point) -> Self {
        Self {
            waypoints,
            start,
            end,
        }
    }

    /// Number of waypoints to be ordered
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Loads a scenario from a JSON file.
    /// Parse failures are reported as `InvalidData` I/O errors.
    pub fn from_json_file(path: impl AsRef<Path>) -> io::Result<Scenario> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Built-in six-waypoint demo scenario used when no scenario file
    /// is supplied on the command line
    pub fn demo() -> Scenario {
        Scenario::new(
            vec![
                Point::new("Waypoint 1", -1902.517, 100.0, 1066.476),
                Point::new("Waypoint 2", 1529.892, 199.972, 822.343),
                Point::new("Waypoint 3", 856.882, 100.0, -422.768),
                Point::new("Waypoint 4", -887.991, 209.611, -452.45),
                Point::new("Waypoint 5", 611.302, 266.972, -1985.706),
                Point::new("Waypoint 6", 1812.085, 290.0, -1760.313),
            ],
            Point::new("Start", 0.0, 317.0, 1000.0),
            Point::new("End", 0.0, 0.0, 3277.0),
        )
    }
}
