/// Domain-level error raised by the service layer.
///
/// The HTTP layer maps each variant to a status code and response envelope;
/// `Internal` is sanitized before it leaves the process.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
