use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::Id;
use crate::domains::fruits::error::FruitError;

/// Typed ID for Fruit entities.
pub type FruitId = Id<Fruit>;

lazy_static! {
    static ref FRUIT_NAME: Regex = Regex::new(r"^[a-zA-Z]+$").expect("fruit name pattern is valid");
}

/// Lifecycle status of a fruit.
///
/// The only transition is `Active -> Deleted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FruitStatus {
    Active,
    Deleted,
}

impl FruitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FruitStatus::Active => "active",
            FruitStatus::Deleted => "deleted",
        }
    }
}

impl fmt::Display for FruitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fruit model - the single managed resource
///
/// Never physically removed: delete flips `status` to `Deleted`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fruit {
    pub id: FruitId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    /// Supplied by the caller's context, not the request body
    pub owner: String,
    pub quantity: i64,
    pub price: f64,
    pub status: FruitStatus,
}

impl Fruit {
    /// Build a new active fruit with a fresh id, validating it before returning.
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        quantity: i64,
        price: f64,
    ) -> Result<Self, FruitError> {
        let now = Utc::now();
        let fruit = Self {
            id: FruitId::new(),
            created_at: now,
            updated_at: now,
            name: name.into(),
            owner: owner.into(),
            quantity,
            price,
            status: FruitStatus::Active,
        };

        fruit.validate()?;
        Ok(fruit)
    }

    /// Check construction rules; the first failing rule wins.
    pub fn validate(&self) -> Result<(), FruitError> {
        if self.name.is_empty() {
            return Err(FruitError::validation("name is required"));
        }

        if !FRUIT_NAME.is_match(&self.name) {
            return Err(FruitError::validation(
                "name cannot contain numbers or special characters",
            ));
        }

        if self.owner.is_empty() {
            return Err(FruitError::validation("owner is required"));
        }

        if self.quantity <= 0 {
            return Err(FruitError::validation("quantity must be greater than zero"));
        }

        if self.price.is_nan() || self.price <= 0.0 {
            return Err(FruitError::validation("price must be greater than zero"));
        }

        Ok(())
    }

    /// Replace quantity and price. Name is not re-validated.
    pub fn restock(&mut self, quantity: i64, price: f64) {
        self.quantity = quantity;
        self.price = price;
        self.touch();
    }

    /// Soft delete.
    pub fn mark_deleted(&mut self) {
        self.status = FruitStatus::Deleted;
        self.touch();
    }

    pub fn is_deleted(&self) -> bool {
        self.status == FruitStatus::Deleted
    }

    /// Case-insensitive substring match on name plus exact match on status.
    pub fn matches_search(&self, name: &str, status: &str) -> bool {
        self.status.as_str() == status && self.name.to_lowercase().contains(&name.to_lowercase())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.created_at);
    }
}
