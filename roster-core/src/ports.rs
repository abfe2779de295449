//! Port traits for paged data providers.
//!
//! Table views depend on these traits only. The institutional store in
//! `roster-database` is one implementation; tests plug in their own.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use roster_utils::pagination::PaginationMeta;

use crate::error::FetchResult;

/// Page requested from a provider, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

/// One page of rows plus the provider's pagination block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub rows: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Asynchronous, paged data provider for one table.
///
/// Errors are returned as-is; callers do not retry.
#[async_trait]
pub trait TableSource<T>: Send + Sync {
    /// Fetch the rows of `request.page` with `request.limit` rows per page.
    async fn fetch(&self, request: PageRequest) -> FetchResult<PageResponse<T>>;
}
