//! Delete fruit action (soft delete)

use tracing::{error, info};

use crate::domains::fruits::data::FruitData;
use crate::domains::fruits::error::FruitError;
use crate::kernel::ServerDeps;

/// Flip a fruit to `deleted`.
///
/// The record stays in the store and remains visible to `get_fruit`.
pub async fn delete_fruit(id: &str, deps: &ServerDeps) -> Result<FruitData, FruitError> {
    let mut fruit = deps.fruits().get(id).await?;

    fruit.mark_deleted();

    deps.fruits().save(&fruit).await.map_err(|e| {
        error!("Failed to save fruit {}: {}", fruit.id, e);
        FruitError::from(e)
    })?;

    info!("Fruit deleted: {}", fruit.id);
    Ok(FruitData::from(fruit))
}
