// Utility modules

pub mod distance;
pub mod generate;
pub mod permutation;
pub mod report;
