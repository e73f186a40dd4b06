//! Book model and DTOs.

use bookshelf_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::author::Author;

/// A row from the `books` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub isbn: String,
    pub published_date: Option<NaiveDate>,
    pub genre: Option<String>,
    pub author_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A book enriched with its author, as returned by all read endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct BookWithAuthor {
    #[serde(flatten)]
    pub book: Book,
    pub author: Author,
}

/// DTO for creating a new book.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    pub title: String,
    pub isbn: String,
    pub published_date: Option<NaiveDate>,
    pub genre: Option<String>,
    pub author_id: DbId,
}

/// DTO for a partial book update. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    pub title: Option<String>,
    pub isbn: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub genre: Option<String>,
    pub author_id: Option<DbId>,
}
