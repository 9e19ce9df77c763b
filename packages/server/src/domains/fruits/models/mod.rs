pub mod fruit;

pub use fruit::{Fruit, FruitId, FruitStatus};
