//! Shared query parameter types for API handlers.

use serde::Deserialize;

use bookshelf_core::types::DbId;

/// Pagination and search parameters (`?page=&limit=&search=`).
///
/// Values are normalized in the handlers via
/// `bookshelf_core::pagination::{normalize_page, normalize_limit}`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}

/// Book list parameters: pagination, search, and an author filter
/// (`?page=&limit=&search=&authorId=`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub author_id: Option<DbId>,
}
