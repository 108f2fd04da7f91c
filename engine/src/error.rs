//! Engine error handling
//!
//! Unified error type for everything the engine can legitimately fail
//! at. Catalog misconfiguration (a program definition referencing an
//! unknown accessory id) is deliberately NOT represented here: that is
//! a deploy-time invariant violation and panics at the point of use.

use thiserror::Error;

/// Errors surfaced to the engine's consumers.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A persisted session payload could not be read back. Never
    /// swallowed: it indicates data corruption upstream.
    #[error("Corrupt session payload: {0}")]
    CorruptPayload(String),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
