// TestDependencies - spy implementations for testing
//
// Provides a repository that can be injected into ServerDeps for tests. It
// delegates to a real in-memory store while recording every call and can be
// told to fail saves.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{
    BaseFruitRepository, FruitSearchFilter, FruitSearchResult, InMemoryFruitRepository,
    RepositoryError, ServerDeps,
};
use crate::common::PageArgs;
use crate::domains::fruits::models::Fruit;

// =============================================================================
// Spy Fruit Repository
// =============================================================================

/// A call captured by the spy repository
#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryCall {
    Save(Fruit),
    Get(String),
    Search {
        filter: FruitSearchFilter,
        page: PageArgs,
    },
    Count,
}

pub struct SpyFruitRepository {
    inner: InMemoryFruitRepository,
    calls: Arc<Mutex<Vec<RepositoryCall>>>,
    save_failure: Arc<Mutex<Option<String>>>,
}

impl SpyFruitRepository {
    pub fn new() -> Self {
        Self {
            inner: InMemoryFruitRepository::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            save_failure: Arc::new(Mutex::new(None)),
        }
    }

    /// Make every subsequent save fail with the given message
    pub fn failing_saves(self, message: &str) -> Self {
        *lock(&self.save_failure) = Some(message.to_string());
        self
    }

    /// Put fruits into the backing store without recording calls
    pub async fn seed(&self, fruits: &[Fruit]) {
        for fruit in fruits {
            // The in-memory store never fails
            let _ = self.inner.save(fruit).await;
        }
    }

    /// Everything stored, in insertion order
    pub async fn stored(&self) -> Vec<Fruit> {
        self.inner.all().await
    }

    pub fn calls(&self) -> Vec<RepositoryCall> {
        lock(&self.calls).clone()
    }

    pub fn save_calls(&self) -> usize {
        self.count_calls(|call| matches!(call, RepositoryCall::Save(_)))
    }

    pub fn get_calls(&self) -> usize {
        self.count_calls(|call| matches!(call, RepositoryCall::Get(_)))
    }

    pub fn search_calls(&self) -> usize {
        self.count_calls(|call| matches!(call, RepositoryCall::Search { .. }))
    }

    fn count_calls(&self, predicate: impl Fn(&RepositoryCall) -> bool) -> usize {
        lock(&self.calls).iter().filter(|call| predicate(call)).count()
    }

    fn record(&self, call: RepositoryCall) {
        lock(&self.calls).push(call);
    }
}

impl Default for SpyFruitRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseFruitRepository for SpyFruitRepository {
    async fn save(&self, fruit: &Fruit) -> Result<(), RepositoryError> {
        self.record(RepositoryCall::Save(fruit.clone()));

        let failure = lock(&self.save_failure).clone();
        if let Some(message) = failure {
            return Err(RepositoryError::Backend(message));
        }

        self.inner.save(fruit).await
    }

    async fn get(&self, id: &str) -> Result<Fruit, RepositoryError> {
        self.record(RepositoryCall::Get(id.to_string()));
        self.inner.get(id).await
    }

    async fn search(
        &self,
        filter: &FruitSearchFilter,
        page: PageArgs,
    ) -> Result<FruitSearchResult, RepositoryError> {
        self.record(RepositoryCall::Search {
            filter: filter.clone(),
            page,
        });
        self.inner.search(filter, page).await
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        self.record(RepositoryCall::Count);
        self.inner.count().await
    }
}

// =============================================================================
// ServerDeps helpers
// =============================================================================

impl ServerDeps {
    /// Dependencies wired to a spy repository; returns both so tests can
    /// inspect calls after running actions.
    pub fn with_spy(spy: SpyFruitRepository) -> (Self, Arc<SpyFruitRepository>) {
        let spy = Arc::new(spy);
        (Self::new(spy.clone()), spy)
    }
}

// A panicking test thread may poison a lock; the recorded data is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
