//! Error types for todolists-db

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the database layer.
///
/// Statement failures carry the raw driver error untranslated: this
/// layer has no recovery strategy of its own, so the caller decides what
/// a constraint violation or a lost connection means. A find that
/// matches no row is `Ok(None)`, not an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
