//! Server dependencies for actions (using traits for testability)
//!
//! This module provides the central dependency container handed to every
//! fruit action. Storage sits behind a trait object so tests can swap in a
//! spy or failing backend.

use std::sync::Arc;

use crate::kernel::{BaseFruitRepository, InMemoryFruitRepository};

/// Server dependencies accessible to actions
#[derive(Clone)]
pub struct ServerDeps {
    pub fruit_repository: Arc<dyn BaseFruitRepository>,
}

impl ServerDeps {
    pub fn new(fruit_repository: Arc<dyn BaseFruitRepository>) -> Self {
        Self { fruit_repository }
    }

    /// Dependencies backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryFruitRepository::new()))
    }

    pub fn fruits(&self) -> &dyn BaseFruitRepository {
        self.fruit_repository.as_ref()
    }
}
