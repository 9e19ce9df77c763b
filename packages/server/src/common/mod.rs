// Common types and utilities shared across the application

pub mod id;
pub mod pagination;

pub use id::Id;
pub use pagination::{page_window, paginate, PageArgs, Paging, MAX_PAGE_LIMIT};
