// HTTP routes
pub mod fruits;
pub mod health;

pub use fruits::*;
pub use health::*;
