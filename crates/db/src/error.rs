//! Store-adapter error type.
//!
//! Driver failures are classified once, here, into a small tagged enum.
//! Callers match on the variant instead of probing error codes or message
//! strings at every call site.

/// PostgreSQL error code for `unique_violation`.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// A failure surfaced by the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A uniqueness constraint was violated. Carries the driver-level
    /// message so the HTTP layer can expose it as a diagnostic detail.
    #[error("unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Any other database failure.
    #[error(transparent)]
    Other(sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION)
                || db_err.message().to_ascii_lowercase().contains("unique")
            {
                return DbError::UniqueViolation(db_err.message().to_string());
            }
        }
        DbError::Other(err)
    }
}
