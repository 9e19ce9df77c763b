// Kernel - infrastructure shared by the domains

pub mod deps;
pub mod memory_store;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use memory_store::InMemoryFruitRepository;
pub use traits::*;
