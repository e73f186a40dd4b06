//! Response middleware that completes error envelopes.
//!
//! Error classification stashes a partially built envelope in the response
//! extensions (the request path is not visible there). This layer runs
//! closest to the routes, captures the path, and re-serializes the body so
//! every error leaving the process carries
//! `{statusCode, timestamp, path, message, error, detail?}`.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::ErrorBody;

/// Rewrite error responses so the envelope includes the request path.
pub async fn error_envelope(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let mut response = next.run(req).await;

    let status = response.status();
    if let Some(mut body) = response.extensions_mut().remove::<ErrorBody>() {
        body.path = path;
        return (status, Json(body)).into_response();
    }

    response
}
