// Distance calculation utilities

use crate::models::Point;

/// Calculate the Euclidean distance between two points
pub fn euclidean_distance(p1: &Point, p2: &Point) -> f64 {
    ((p1.x - p2.x).powi(2) + (p1.y - p2.y).powi(2) + (p1.z - p2.z).powi(2)).sqrt()
}
