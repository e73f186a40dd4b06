//! Root-level metadata and health routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::meta;
use crate::state::AppState;

/// Mount the `/` metadata and `/health` endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(meta::api_info))
        .route("/health", get(meta::health_check))
}
