//! Handlers for author CRUD endpoints.
//!
//! Deleting an author is refused while any book still references it; the
//! pre-check is best-effort and the `ON DELETE RESTRICT` foreign key remains
//! the authoritative guard.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use bookshelf_core::authors::{validate_bio, validate_first_name, validate_last_name};
use bookshelf_core::error::CoreError;
use bookshelf_core::pagination::{normalize_limit, normalize_page, offset};
use bookshelf_core::types::DbId;
use bookshelf_db::models::author::{CreateAuthor, UpdateAuthor};
use bookshelf_db::repositories::{AuthorRepo, BookRepo};

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::response::PageResponse;
use crate::state::AppState;

/// POST /authors
pub async fn create_author(
    State(state): State<AppState>,
    Json(input): Json<CreateAuthor>,
) -> AppResult<impl IntoResponse> {
    validate_first_name(&input.first_name).map_err(AppError::BadRequest)?;
    validate_last_name(&input.last_name).map_err(AppError::BadRequest)?;
    if let Some(ref bio) = input.bio {
        validate_bio(bio).map_err(AppError::BadRequest)?;
    }

    let author = AuthorRepo::create(&state.pool, &input).await?;

    tracing::info!(author_id = %author.id, "Author created");

    Ok((StatusCode::CREATED, Json(author)))
}

/// GET /authors?page=&limit=&search=
pub async fn list_authors(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let page = normalize_page(params.page);
    let limit = normalize_limit(params.limit);
    let search = params.search.as_deref().filter(|s| !s.trim().is_empty());

    let items = AuthorRepo::list(&state.pool, search, limit, offset(page, limit)).await?;
    let total = AuthorRepo::count(&state.pool, search).await?;

    Ok(Json(PageResponse {
        items,
        total,
        page,
        limit,
    }))
}

/// GET /authors/{id}
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let author = AuthorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Author" })?;

    Ok(Json(author))
}

/// PATCH /authors/{id}
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAuthor>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref first_name) = input.first_name {
        validate_first_name(first_name).map_err(AppError::BadRequest)?;
    }
    if let Some(ref last_name) = input.last_name {
        validate_last_name(last_name).map_err(AppError::BadRequest)?;
    }
    if let Some(ref bio) = input.bio {
        validate_bio(bio).map_err(AppError::BadRequest)?;
    }

    let author = AuthorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Author" })?;

    tracing::info!(author_id = %id, "Author updated");

    Ok(Json(author))
}

/// DELETE /authors/{id}
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let book_count = BookRepo::count_by_author(&state.pool, id).await?;
    if book_count > 0 {
        return Err(CoreError::Validation(
            "Author has associated books. Delete books first.".to_string(),
        )
        .into());
    }

    let deleted = AuthorRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "Author" }.into());
    }

    tracing::info!(author_id = %id, "Author deleted");

    Ok(StatusCode::NO_CONTENT)
}
