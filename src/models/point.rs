// Point model representing a named coordinate in 3D space

use serde::{Deserialize, Serialize};

/// A labeled point with (x, y, z) coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Display name for the point (unique within a scenario)
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Creates a new named point with the given coordinates
    pub fn new(name: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            z,
        }
    }

    /// Calculates the Euclidean distance between two points
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}
