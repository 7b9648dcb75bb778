// Public modules
pub mod algorithms;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::brute_force::BruteForceSolver;
pub use algorithms::RouteSolver;
pub use models::{Point, Route, Scenario, SearchResult};
