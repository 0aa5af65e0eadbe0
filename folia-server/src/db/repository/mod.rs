//! Repository Module
//!
//! Free-function CRUD and state-management operations over the SQLite pool.
//! Every multi-statement mutation runs inside a single sqlx transaction; the
//! storage engine's isolation is the only concurrency mechanism — no
//! application-level locking or retries.

pub mod app_setting;
pub mod courtesy;
pub mod lot;
pub mod order;
pub mod promo_card;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
