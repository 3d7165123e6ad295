//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters (`?page=&limit=`), both 1-based and optional.
///
/// Resolved into a `LIMIT`/`OFFSET` pair by
/// [`marquee_core::movies::resolve_page`].
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
