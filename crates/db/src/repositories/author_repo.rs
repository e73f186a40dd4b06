//! Repository for the `authors` table.

use bookshelf_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::author::{Author, CreateAuthor, UpdateAuthor};

/// Column list for authors queries.
const COLUMNS: &str = "id, first_name, last_name, bio, birth_date, created_at, updated_at";

/// Provides CRUD operations for authors.
pub struct AuthorRepo;

impl AuthorRepo {
    /// Insert a new author, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAuthor) -> Result<Author, DbError> {
        let query = format!(
            "INSERT INTO authors (first_name, last_name, bio, birth_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let author = sqlx::query_as::<_, Author>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.bio)
            .bind(input.birth_date)
            .fetch_one(pool)
            .await?;
        Ok(author)
    }

    /// Find an author by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Author>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM authors WHERE id = $1");
        let author = sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(author)
    }

    /// List authors in creation order, optionally filtered by a
    /// case-insensitive substring match on first or last name.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Author>, DbError> {
        let authors = if let Some(search) = search {
            let pattern = format!("%{search}%");
            let query = format!(
                "SELECT {COLUMNS} FROM authors
                 WHERE first_name ILIKE $1 OR last_name ILIKE $1
                 ORDER BY created_at ASC
                 LIMIT $2 OFFSET $3"
            );
            sqlx::query_as::<_, Author>(&query)
                .bind(&pattern)
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await?
        } else {
            let query = format!(
                "SELECT {COLUMNS} FROM authors
                 ORDER BY created_at ASC
                 LIMIT $1 OFFSET $2"
            );
            sqlx::query_as::<_, Author>(&query)
                .bind(limit)
                .bind(offset)
                .fetch_all(pool)
                .await?
        };
        Ok(authors)
    }

    /// Count authors matching the same filter as [`Self::list`].
    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64, DbError> {
        let count: i64 = if let Some(search) = search {
            let pattern = format!("%{search}%");
            sqlx::query_scalar(
                "SELECT COUNT(*) FROM authors WHERE first_name ILIKE $1 OR last_name ILIKE $1",
            )
            .bind(&pattern)
            .fetch_one(pool)
            .await?
        } else {
            sqlx::query_scalar("SELECT COUNT(*) FROM authors")
                .fetch_one(pool)
                .await?
        };
        Ok(count)
    }

    /// Update an author by ID, merging only the provided fields.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAuthor,
    ) -> Result<Option<Author>, DbError> {
        let query = format!(
            "UPDATE authors SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                bio = COALESCE($4, bio),
                birth_date = COALESCE($5, birth_date),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let author = sqlx::query_as::<_, Author>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.bio)
            .bind(input.birth_date)
            .fetch_optional(pool)
            .await?;
        Ok(author)
    }

    /// Delete an author by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
