pub mod authors;
pub mod books;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the entity route tree.
///
/// ```text
/// /authors            list, create
/// /authors/{id}       get, update, delete
/// /books              list, create
/// /books/{id}         get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/authors", authors::router())
        .nest("/books", books::router())
}
