use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::Paging;
use crate::domains::fruits::models::{Fruit as FruitModel, FruitStatus};

/// Fruit API data type
///
/// Public representation of a fruit returned by every action and route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FruitData {
    /// Opaque unique identifier
    pub id: String,

    /// When the fruit was created
    #[serde(rename = "date_created")]
    pub created_at: DateTime<Utc>,

    /// When the fruit was last mutated
    #[serde(rename = "date_last_updated")]
    pub updated_at: DateTime<Utc>,

    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub owner: String,
    pub status: FruitStatus,
}

impl From<FruitModel> for FruitData {
    fn from(fruit: FruitModel) -> Self {
        Self {
            id: fruit.id.into_string(),
            created_at: fruit.created_at,
            updated_at: fruit.updated_at,
            name: fruit.name,
            quantity: fruit.quantity,
            price: fruit.price,
            owner: fruit.owner,
            status: fruit.status,
        }
    }
}

/// One page of search results plus the paging summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFruitsData {
    pub paging: Paging,
    pub results: Vec<FruitData>,
}
