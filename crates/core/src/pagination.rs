//! Pagination defaults and helpers shared by all list endpoints.

/// Page number used when the client does not provide one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the client does not provide one.
pub const DEFAULT_LIMIT: i64 = 10;

/// Maximum page size a client may request.
pub const MAX_LIMIT: i64 = 100;

/// Clamp a user-provided page number to a positive value.
pub fn normalize_page(page: Option<i64>) -> i64 {
    page.unwrap_or(DEFAULT_PAGE).max(1)
}

/// Clamp a user-provided page size to valid bounds.
pub fn normalize_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).max(1).min(MAX_LIMIT)
}

/// Row offset for a page window.
pub fn offset(page: i64, limit: i64) -> i64 {
    (page - 1) * limit
}
