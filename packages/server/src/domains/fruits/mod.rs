//! Fruits domain - the single managed resource
//!
//! Architecture:
//!   HTTP route → action(input, deps) → BaseFruitRepository
//!
//! Entity rules live in `models`, output shapes in `data`, orchestration in
//! `actions`.

pub mod actions;
pub mod data;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use data::{FruitData, SearchFruitsData};
pub use error::FruitError;
pub use models::{Fruit, FruitId, FruitStatus};
