//! Search fruits action

use tracing::debug;

use crate::common::PageArgs;
use crate::domains::fruits::data::{FruitData, SearchFruitsData};
use crate::domains::fruits::error::FruitError;
use crate::kernel::{FruitSearchFilter, ServerDeps};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFruitsInput {
    pub name: String,
    pub status: String,
    /// 1-based page number
    pub offset: i64,
    pub limit: i64,
}

impl SearchFruitsInput {
    /// Checked in order: name, status, offset, limit.
    fn validate(&self) -> Result<PageArgs, FruitError> {
        if self.name.is_empty() {
            return Err(FruitError::validation("name is required"));
        }

        if self.status.is_empty() {
            return Err(FruitError::validation("status is required"));
        }

        PageArgs::new(self.offset, self.limit)
            .validate()
            .map_err(FruitError::validation)
    }
}

/// Search fruits by name substring and exact status, one page at a time.
pub async fn search_fruits(
    input: SearchFruitsInput,
    deps: &ServerDeps,
) -> Result<SearchFruitsData, FruitError> {
    let page = input.validate().map_err(|e| {
        debug!("Rejected fruit search: {}", e);
        e
    })?;

    let filter = FruitSearchFilter {
        name: input.name,
        status: input.status,
    };

    let result = deps.fruits().search(&filter, page).await?;

    debug!(
        "Fruit search name={:?} status={:?} matched {} (page {} of size {})",
        filter.name, filter.status, result.paging.total, page.offset, page.limit
    );

    Ok(SearchFruitsData {
        paging: result.paging,
        results: result.results.into_iter().map(FruitData::from).collect(),
    })
}
