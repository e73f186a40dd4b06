//! Root metadata and health check handlers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::iso_timestamp;
use crate::state::AppState;

/// API metadata returned by `GET /`.
#[derive(Serialize)]
pub struct ApiInfo {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    status: &'static str,
    timestamp: String,
    endpoints: Endpoints,
}

#[derive(Serialize)]
struct Endpoints {
    authors: &'static str,
    books: &'static str,
    health: &'static str,
}

/// GET / -- API name, version, and endpoint map.
pub async fn api_info() -> Json<ApiInfo> {
    Json(ApiInfo {
        name: "Book Management API",
        version: env!("CARGO_PKG_VERSION"),
        description: env!("CARGO_PKG_DESCRIPTION"),
        status: "operational",
        timestamp: iso_timestamp(),
        endpoints: Endpoints {
            authors: "/authors",
            books: "/books",
            health: "/health",
        },
    })
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    uptime: f64,
    timestamp: String,
    environment: String,
}

/// GET /health -- service status, uptime in seconds, and environment.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime: state.started_at.elapsed().as_secs_f64(),
        timestamp: iso_timestamp(),
        environment: state.config.environment.clone(),
    })
}
