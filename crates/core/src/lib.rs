//! Domain layer shared by the persistence and HTTP crates.
//!
//! Holds the error taxonomy, ID/timestamp aliases, pagination helpers, and
//! per-entity validation rules. Zero internal dependencies so it can be used
//! by both the repository layer and any future CLI tooling.

pub mod authors;
pub mod books;
pub mod error;
pub mod pagination;
pub mod types;
