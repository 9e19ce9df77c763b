//! Fruit fixtures for integration tests.

use chrono::{Duration, Utc};
use fruits_core::domains::fruits::Fruit;

/// An active fruit whose timestamps sit an hour in the past, so any later
/// mutation is observably newer.
pub fn fruit(name: &str) -> Fruit {
    let mut fruit = Fruit::new(name, "owner", 10, 2.5).expect("fixture fruit is valid");
    let past = Utc::now() - Duration::hours(1);
    fruit.created_at = past;
    fruit.updated_at = past;
    fruit
}

/// Same as [`fruit`] but already soft-deleted.
pub fn deleted_fruit(name: &str) -> Fruit {
    let mut fruit = fruit(name);
    fruit.mark_deleted();
    fruit
}

/// `count` active fruits sharing one name.
pub fn fruits_named(name: &str, count: usize) -> Vec<Fruit> {
    (0..count).map(|_| fruit(name)).collect()
}
