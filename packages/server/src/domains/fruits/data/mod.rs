pub mod fruit;

pub use fruit::{FruitData, SearchFruitsData};
