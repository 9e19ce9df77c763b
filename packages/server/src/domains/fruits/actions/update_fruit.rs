//! Update fruit action

use tracing::{debug, error, info};

use crate::domains::fruits::data::FruitData;
use crate::domains::fruits::error::FruitError;
use crate::kernel::ServerDeps;

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateFruitInput {
    pub id: String,
    pub quantity: i64,
    pub price: f64,
}

impl UpdateFruitInput {
    /// Checked in order: id, quantity, price.
    fn validate(&self) -> Result<(), FruitError> {
        if self.id.is_empty() {
            return Err(FruitError::validation("id is required"));
        }

        if self.quantity <= 0 {
            return Err(FruitError::validation("quantity must be greater than zero"));
        }

        if self.price.is_nan() || self.price <= 0.0 {
            return Err(FruitError::validation("price must be greater than zero"));
        }

        Ok(())
    }
}

/// Replace a fruit's quantity and price.
///
/// Input is validated before the repository is touched. Name, owner, status
/// and creation time are left as they are.
pub async fn update_fruit(
    input: UpdateFruitInput,
    deps: &ServerDeps,
) -> Result<FruitData, FruitError> {
    input.validate().map_err(|e| {
        debug!("Rejected fruit update for {:?}: {}", input.id, e);
        e
    })?;

    let mut fruit = deps.fruits().get(&input.id).await?;

    fruit.restock(input.quantity, input.price);

    deps.fruits().save(&fruit).await.map_err(|e| {
        error!("Failed to save fruit {}: {}", fruit.id, e);
        FruitError::from(e)
    })?;

    info!(
        "Fruit updated: {} (quantity={}, price={})",
        fruit.id, fruit.quantity, fruit.price
    );
    Ok(FruitData::from(fruit))
}
