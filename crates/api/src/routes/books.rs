//! Route definitions for books, mounted at `/books` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

/// Book routes.
///
/// ```text
/// GET    /       -> list_books (?page, limit, search, authorId)
/// POST   /       -> create_book
/// GET    /{id}   -> get_book
/// PATCH  /{id}   -> update_book
/// DELETE /{id}   -> delete_book
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(books::list_books).post(books::create_book))
        .route(
            "/{id}",
            get(books::get_book)
                .patch(books::update_book)
                .delete(books::delete_book),
        )
}
