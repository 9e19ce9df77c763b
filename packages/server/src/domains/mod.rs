// Business domains
pub mod fruits;
