// Models module - exports all model types

mod point;
mod route;
mod scenario;

// Re-export model types
pub use self::point::Point;
pub use self::route::{Route, SearchResult};
pub use self::scenario::Scenario;

// Common type aliases for improved code readability
pub type WaypointIndex = usize;
pub type Score = f64;
