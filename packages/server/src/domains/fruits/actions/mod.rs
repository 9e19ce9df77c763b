//! Fruit domain actions - business logic functions
//!
//! Actions are async functions called directly from HTTP routes. Each one
//! validates its input, talks to the repository through `ServerDeps`, and
//! returns `FruitData` (or `SearchFruitsData`) on success.

mod create_fruit;
mod delete_fruit;
mod get_fruit;
mod search_fruits;
mod update_fruit;

pub use create_fruit::{create_fruit, CreateFruitInput};
pub use delete_fruit::delete_fruit;
pub use get_fruit::get_fruit;
pub use search_fruits::{search_fruits, SearchFruitsInput};
pub use update_fruit::{update_fruit, UpdateFruitInput};
