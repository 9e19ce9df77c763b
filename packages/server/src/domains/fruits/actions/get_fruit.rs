//! Get fruit action

use tracing::debug;

use crate::domains::fruits::data::FruitData;
use crate::domains::fruits::error::FruitError;
use crate::kernel::ServerDeps;

/// Fetch a fruit by id. Deleted fruits are still returned.
pub async fn get_fruit(id: &str, deps: &ServerDeps) -> Result<FruitData, FruitError> {
    let fruit = deps.fruits().get(id).await.map_err(|e| {
        debug!("Fruit lookup failed for {}: {}", id, e);
        FruitError::from(e)
    })?;

    Ok(FruitData::from(fruit))
}
