//! Create fruit action

use tracing::{debug, error, info};

use crate::domains::fruits::data::FruitData;
use crate::domains::fruits::error::FruitError;
use crate::domains::fruits::models::Fruit;
use crate::kernel::ServerDeps;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateFruitInput {
    pub name: String,
    pub owner: String,
    pub quantity: i64,
    pub price: f64,
}

/// Create a new active fruit.
///
/// The entity validates itself on construction; nothing is saved when that
/// fails.
pub async fn create_fruit(
    input: CreateFruitInput,
    deps: &ServerDeps,
) -> Result<FruitData, FruitError> {
    let fruit = Fruit::new(input.name, input.owner, input.quantity, input.price).map_err(|e| {
        debug!("Rejected fruit creation: {}", e);
        e
    })?;

    deps.fruits().save(&fruit).await.map_err(|e| {
        error!("Failed to save fruit {}: {}", fruit.id, e);
        FruitError::from(e)
    })?;

    info!("Fruit created: {} ({})", fruit.id, fruit.name);
    Ok(FruitData::from(fruit))
}
