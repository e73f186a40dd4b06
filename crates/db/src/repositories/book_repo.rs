//! Repository for the `books` table.
//!
//! Read queries join the owning author so responses can embed it without a
//! second round trip.

use bookshelf_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::author::Author;
use crate::models::book::{Book, BookWithAuthor, CreateBook, UpdateBook};

/// Column list for the `books` table.
const COLUMNS: &str = "id, title, isbn, published_date, genre, author_id, created_at, updated_at";

/// Column list for book + author JOIN queries (author columns aliased).
const JOINED_COLUMNS: &str = "b.id, b.title, b.isbn, b.published_date, b.genre, b.author_id, \
    b.created_at, b.updated_at, \
    a.first_name AS author_first_name, a.last_name AS author_last_name, \
    a.bio AS author_bio, a.birth_date AS author_birth_date, \
    a.created_at AS author_created_at, a.updated_at AS author_updated_at";

/// Flat row shape produced by the book + author JOIN queries.
#[derive(sqlx::FromRow)]
struct BookAuthorRow {
    id: DbId,
    title: String,
    isbn: String,
    published_date: Option<NaiveDate>,
    genre: Option<String>,
    author_id: DbId,
    created_at: Timestamp,
    updated_at: Timestamp,
    author_first_name: String,
    author_last_name: String,
    author_bio: Option<String>,
    author_birth_date: Option<NaiveDate>,
    author_created_at: Timestamp,
    author_updated_at: Timestamp,
}

impl From<BookAuthorRow> for BookWithAuthor {
    fn from(row: BookAuthorRow) -> Self {
        BookWithAuthor {
            book: Book {
                id: row.id,
                title: row.title,
                isbn: row.isbn,
                published_date: row.published_date,
                genre: row.genre,
                author_id: row.author_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            author: Author {
                id: row.author_id,
                first_name: row.author_first_name,
                last_name: row.author_last_name,
                bio: row.author_bio,
                birth_date: row.author_birth_date,
                created_at: row.author_created_at,
                updated_at: row.author_updated_at,
            },
        }
    }
}

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book, returning the created row.
    ///
    /// Uniqueness of `isbn` is enforced by the `uq_books_isbn` constraint;
    /// a violation surfaces as [`DbError::UniqueViolation`].
    pub async fn create(pool: &PgPool, input: &CreateBook) -> Result<Book, DbError> {
        let query = format!(
            "INSERT INTO books (title, isbn, published_date, genre, author_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(&input.title)
            .bind(&input.isbn)
            .bind(input.published_date)
            .bind(&input.genre)
            .bind(input.author_id)
            .fetch_one(pool)
            .await?;
        Ok(book)
    }

    /// Find a book by ID, with its author embedded.
    pub async fn find_by_id_with_author(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BookWithAuthor>, DbError> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM books b
             INNER JOIN authors a ON a.id = b.author_id
             WHERE b.id = $1"
        );
        let row = sqlx::query_as::<_, BookAuthorRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(BookWithAuthor::from))
    }

    /// List books in creation order with authors embedded.
    ///
    /// `search` is a case-insensitive substring match on title or ISBN;
    /// `author_id` restricts to one author's books. Both filters combine
    /// with AND when present.
    pub async fn list_with_authors(
        pool: &PgPool,
        search: Option<&str>,
        author_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<BookWithAuthor>, DbError> {
        let pattern = search.map(|s| format!("%{s}%"));

        let query = match (&pattern, author_id) {
            (Some(_), Some(_)) => format!(
                "SELECT {JOINED_COLUMNS} FROM books b
                 INNER JOIN authors a ON a.id = b.author_id
                 WHERE (b.title ILIKE $1 OR b.isbn ILIKE $1) AND b.author_id = $2
                 ORDER BY b.created_at ASC
                 LIMIT $3 OFFSET $4"
            ),
            (Some(_), None) => format!(
                "SELECT {JOINED_COLUMNS} FROM books b
                 INNER JOIN authors a ON a.id = b.author_id
                 WHERE b.title ILIKE $1 OR b.isbn ILIKE $1
                 ORDER BY b.created_at ASC
                 LIMIT $2 OFFSET $3"
            ),
            (None, Some(_)) => format!(
                "SELECT {JOINED_COLUMNS} FROM books b
                 INNER JOIN authors a ON a.id = b.author_id
                 WHERE b.author_id = $1
                 ORDER BY b.created_at ASC
                 LIMIT $2 OFFSET $3"
            ),
            (None, None) => format!(
                "SELECT {JOINED_COLUMNS} FROM books b
                 INNER JOIN authors a ON a.id = b.author_id
                 ORDER BY b.created_at ASC
                 LIMIT $1 OFFSET $2"
            ),
        };

        let rows = match (&pattern, author_id) {
            (Some(pattern), Some(author_id)) => {
                sqlx::query_as::<_, BookAuthorRow>(&query)
                    .bind(pattern)
                    .bind(author_id)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await?
            }
            (Some(pattern), None) => {
                sqlx::query_as::<_, BookAuthorRow>(&query)
                    .bind(pattern)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await?
            }
            (None, Some(author_id)) => {
                sqlx::query_as::<_, BookAuthorRow>(&query)
                    .bind(author_id)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await?
            }
            (None, None) => {
                sqlx::query_as::<_, BookAuthorRow>(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await?
            }
        };

        Ok(rows.into_iter().map(BookWithAuthor::from).collect())
    }

    /// Count books matching the same filters as [`Self::list_with_authors`].
    pub async fn count(
        pool: &PgPool,
        search: Option<&str>,
        author_id: Option<DbId>,
    ) -> Result<i64, DbError> {
        let pattern = search.map(|s| format!("%{s}%"));

        let count: i64 = match (&pattern, author_id) {
            (Some(pattern), Some(author_id)) => {
                sqlx::query_scalar(
                    "SELECT COUNT(*) FROM books
                     WHERE (title ILIKE $1 OR isbn ILIKE $1) AND author_id = $2",
                )
                .bind(pattern)
                .bind(author_id)
                .fetch_one(pool)
                .await?
            }
            (Some(pattern), None) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE title ILIKE $1 OR isbn ILIKE $1")
                    .bind(pattern)
                    .fetch_one(pool)
                    .await?
            }
            (None, Some(author_id)) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE author_id = $1")
                    .bind(author_id)
                    .fetch_one(pool)
                    .await?
            }
            (None, None) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM books")
                    .fetch_one(pool)
                    .await?
            }
        };

        Ok(count)
    }

    /// Count books referencing the given author.
    ///
    /// Used as the delete-protection pre-check; the authoritative guard is
    /// the `ON DELETE RESTRICT` foreign key.
    pub async fn count_by_author(pool: &PgPool, author_id: DbId) -> Result<i64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Update a book by ID, merging only the provided fields.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBook,
    ) -> Result<Option<Book>, DbError> {
        let query = format!(
            "UPDATE books SET
                title = COALESCE($2, title),
                isbn = COALESCE($3, isbn),
                published_date = COALESCE($4, published_date),
                genre = COALESCE($5, genre),
                author_id = COALESCE($6, author_id),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.isbn)
            .bind(input.published_date)
            .bind(&input.genre)
            .bind(input.author_id)
            .fetch_optional(pool)
            .await?;
        Ok(book)
    }

    /// Delete a book by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
