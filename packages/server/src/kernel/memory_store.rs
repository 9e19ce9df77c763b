use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::common::{paginate, PageArgs, Paging};
use crate::domains::fruits::models::Fruit;
use crate::kernel::traits::{
    BaseFruitRepository, FruitSearchFilter, FruitSearchResult, RepositoryError,
};

/// In-memory fruit store
///
/// Keeps fruits in insertion order; an update replaces the entry in place and
/// never moves it. One lock guards the whole sequence so save/get/search are
/// linearizable. Lookups are linear scans. A deleted fruit is never replaced
/// by an active copy.
#[derive(Clone, Default)]
pub struct InMemoryFruitRepository {
    fruits: Arc<RwLock<Vec<Fruit>>>,
}

impl InMemoryFruitRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored fruit in insertion order
    pub async fn all(&self) -> Vec<Fruit> {
        self.fruits.read().await.clone()
    }
}

#[async_trait]
impl BaseFruitRepository for InMemoryFruitRepository {
    async fn save(&self, fruit: &Fruit) -> Result<(), RepositoryError> {
        let mut fruits = self.fruits.write().await;

        match fruits.iter_mut().find(|existing| existing.id == fruit.id) {
            Some(existing) if existing.is_deleted() && !fruit.is_deleted() => {
                return Err(RepositoryError::Conflict(fruit.id.to_string()));
            }
            Some(existing) => *existing = fruit.clone(),
            None => fruits.push(fruit.clone()),
        }

        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Fruit, RepositoryError> {
        let fruits = self.fruits.read().await;
        fruits
            .iter()
            .find(|fruit| fruit.id == *id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn search(
        &self,
        filter: &FruitSearchFilter,
        page: PageArgs,
    ) -> Result<FruitSearchResult, RepositoryError> {
        let matches: Vec<Fruit> = {
            let fruits = self.fruits.read().await;
            fruits
                .iter()
                .filter(|fruit| fruit.matches_search(&filter.name, &filter.status))
                .cloned()
                .collect()
        };

        let paging = Paging::new(matches.len(), page);
        let results = paginate(matches, page.offset, page.limit);

        Ok(FruitSearchResult { paging, results })
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.fruits.read().await.len())
    }
}
