//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Page envelope used by all list endpoints.
///
/// `total` is the full matching count regardless of the page window.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}
