//! Handlers for book CRUD endpoints.
//!
//! Creating or re-assigning a book requires its author to exist; the lookup
//! here is a best-effort pre-check and the foreign key is the authoritative
//! guard. ISBN uniqueness is enforced solely by the database constraint,
//! with the resulting violation translated to a conflict response.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use bookshelf_core::books::{validate_genre, validate_isbn, validate_title};
use bookshelf_core::error::CoreError;
use bookshelf_core::pagination::{normalize_limit, normalize_page, offset};
use bookshelf_core::types::DbId;
use bookshelf_db::models::book::{BookWithAuthor, CreateBook, UpdateBook};
use bookshelf_db::repositories::{AuthorRepo, BookRepo};
use bookshelf_db::DbError;

use crate::error::{AppError, AppResult};
use crate::query::BookListParams;
use crate::response::PageResponse;
use crate::state::AppState;

/// POST /books
pub async fn create_book(
    State(state): State<AppState>,
    Json(input): Json<CreateBook>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(AppError::BadRequest)?;
    validate_isbn(&input.isbn).map_err(AppError::BadRequest)?;
    if let Some(ref genre) = input.genre {
        validate_genre(genre).map_err(AppError::BadRequest)?;
    }

    let author = AuthorRepo::find_by_id(&state.pool, input.author_id)
        .await?
        .ok_or_else(|| CoreError::Validation("Author not found".to_string()))?;

    let book = match BookRepo::create(&state.pool, &input).await {
        Ok(book) => book,
        Err(DbError::UniqueViolation(_)) => {
            return Err(CoreError::Conflict("ISBN already exists".to_string()).into());
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(book_id = %book.id, author_id = %author.id, "Book created");

    Ok((
        StatusCode::CREATED,
        Json(BookWithAuthor { book, author }),
    ))
}

/// GET /books?page=&limit=&search=&authorId=
pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<BookListParams>,
) -> AppResult<impl IntoResponse> {
    let page = normalize_page(params.page);
    let limit = normalize_limit(params.limit);
    let search = params.search.as_deref().filter(|s| !s.trim().is_empty());

    let items = BookRepo::list_with_authors(
        &state.pool,
        search,
        params.author_id,
        limit,
        offset(page, limit),
    )
    .await?;
    let total = BookRepo::count(&state.pool, search, params.author_id).await?;

    Ok(Json(PageResponse {
        items,
        total,
        page,
        limit,
    }))
}

/// GET /books/{id}
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let book = BookRepo::find_by_id_with_author(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Book" })?;

    Ok(Json(book))
}

/// PATCH /books/{id}
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBook>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_title(title).map_err(AppError::BadRequest)?;
    }
    if let Some(ref isbn) = input.isbn {
        validate_isbn(isbn).map_err(AppError::BadRequest)?;
    }
    if let Some(ref genre) = input.genre {
        validate_genre(genre).map_err(AppError::BadRequest)?;
    }
    if let Some(author_id) = input.author_id {
        AuthorRepo::find_by_id(&state.pool, author_id)
            .await?
            .ok_or_else(|| CoreError::Validation("Author not found".to_string()))?;
    }

    let updated = match BookRepo::update(&state.pool, id, &input).await {
        Ok(Some(book)) => book,
        Ok(None) => return Err(CoreError::NotFound { entity: "Book" }.into()),
        Err(DbError::UniqueViolation(_)) => {
            return Err(CoreError::Conflict("ISBN already exists".to_string()).into());
        }
        Err(err) => return Err(err.into()),
    };

    let book = BookRepo::find_by_id_with_author(&state.pool, updated.id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Book" })?;

    tracing::info!(book_id = %id, "Book updated");

    Ok(Json(book))
}

/// DELETE /books/{id}
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = BookRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(CoreError::NotFound { entity: "Book" }.into());
    }

    tracing::info!(book_id = %id, "Book deleted");

    Ok(StatusCode::NO_CONTENT)
}
