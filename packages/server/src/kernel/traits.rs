// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Validation and orchestration belong to the domain actions that use them.
//
// Naming convention: Base* for trait names (e.g., BaseFruitRepository)

use async_trait::async_trait;
use thiserror::Error;

use crate::common::{PageArgs, Paging};
use crate::domains::fruits::models::Fruit;

// =============================================================================
// Repository errors
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("fruit not found")]
    NotFound,

    /// The write would move a deleted fruit back to active
    #[error("fruit {0} was deleted")]
    Conflict(String),

    /// Backend-specific failure (I/O, connection, poisoned state)
    #[error("{0}")]
    Backend(String),
}

// =============================================================================
// Search types
// =============================================================================

/// Search filter: substring on name, exact status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FruitSearchFilter {
    pub name: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FruitSearchResult {
    pub paging: Paging,
    pub results: Vec<Fruit>,
}

// =============================================================================
// Fruit Repository Trait (Infrastructure - storage backend)
// =============================================================================

#[async_trait]
pub trait BaseFruitRepository: Send + Sync {
    /// Upsert by id: replace in place when the id exists, append otherwise.
    ///
    /// Fails with `Conflict` instead of replacing a deleted fruit with an
    /// active copy, so status only ever moves `active -> deleted`.
    async fn save(&self, fruit: &Fruit) -> Result<(), RepositoryError>;

    /// Fetch by id, failing with `NotFound` when absent
    async fn get(&self, id: &str) -> Result<Fruit, RepositoryError>;

    /// Filter first, then cut the page out of the matches
    async fn search(
        &self,
        filter: &FruitSearchFilter,
        page: PageArgs,
    ) -> Result<FruitSearchResult, RepositoryError>;

    /// Number of stored fruits regardless of status
    async fn count(&self) -> Result<usize, RepositoryError>;
}
