//! Offset/limit pagination types
//!
//! Pages are 1-based: page `offset` of size `limit` covers the half-open
//! window `[(offset - 1) * limit, offset * limit)` of the filtered results.
//!
//! # Usage
//!
//! ```rust,ignore
//! // In an action
//! let page = PageArgs::new(input.offset, input.limit).validate()?;
//!
//! // In a store
//! let window = page_window(offset, limit, matches.len());
//! let results = matches[window].to_vec();
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Largest page size a caller may request.
pub const MAX_PAGE_LIMIT: i64 = 100;

// ============================================================================
// Pagination Arguments
// ============================================================================

/// Raw pagination arguments as received from a caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageArgs {
    /// 1-based page number.
    pub offset: i64,
    /// Page size.
    pub limit: i64,
}

impl PageArgs {
    pub fn new(offset: i64, limit: i64) -> Self {
        PageArgs { offset, limit }
    }

    /// Validate pagination arguments.
    ///
    /// Offset is checked before limit.
    pub fn validate(&self) -> Result<PageArgs, &'static str> {
        if self.offset <= 0 {
            return Err("offset must be greater than 0");
        }

        if !(1..=MAX_PAGE_LIMIT).contains(&self.limit) {
            return Err("limit must be a number between 1 and 100");
        }

        Ok(*self)
    }
}

// ============================================================================
// Paging summary
// ============================================================================

/// Summary of a search window: total matches plus the requested window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Count of all matching items, not the size of the returned page.
    pub total: usize,
    pub offset: i64,
    pub limit: i64,
}

impl Paging {
    pub fn new(total: usize, args: PageArgs) -> Self {
        Paging {
            total,
            offset: args.offset,
            limit: args.limit,
        }
    }
}

// ============================================================================
// Window computation
// ============================================================================

/// Compute the slice range for a page over `len` filtered items.
///
/// Both bounds are clamped to `[0, len]`. A window that starts at or past the
/// end is empty rather than an error.
pub fn page_window(offset: i64, limit: i64, len: usize) -> Range<usize> {
    let len_i64 = i64::try_from(len).unwrap_or(i64::MAX);
    let clamp = |value: i64| value.clamp(0, len_i64) as usize;

    let start = clamp(offset.saturating_sub(1).saturating_mul(limit));
    let end = clamp(offset.saturating_mul(limit));

    start.min(end)..end
}

/// Take the page described by `offset`/`limit` out of `items`.
pub fn paginate<T>(items: Vec<T>, offset: i64, limit: i64) -> Vec<T> {
    let window = page_window(offset, limit, items.len());
    items
        .into_iter()
        .skip(window.start)
        .take(window.end - window.start)
        .collect()
}
