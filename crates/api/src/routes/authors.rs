//! Route definitions for authors, mounted at `/authors` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::authors;
use crate::state::AppState;

/// Author routes.
///
/// ```text
/// GET    /       -> list_authors (?page, limit, search)
/// POST   /       -> create_author
/// GET    /{id}   -> get_author
/// PATCH  /{id}   -> update_author
/// DELETE /{id}   -> delete_author
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(authors::list_authors).post(authors::create_author))
        .route(
            "/{id}",
            get(authors::get_author)
                .patch(authors::update_author)
                .delete(authors::delete_author),
        )
}
