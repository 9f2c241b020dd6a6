//! Error types for bestiary-catalog

use bestiary_core::{IdSpaceError, IntegrityError};
use thiserror::Error;

/// Result type for bestiary-catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling a catalog
#[derive(Debug, Error)]
pub enum Error {
    /// Content could not be read or parsed
    #[error("content error: {0}")]
    Content(#[from] bestiary_script::Error),

    /// Content parsed but broke a table invariant
    #[error("integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    /// No identifier space was declared for a namespace
    #[error("no identifier space declared for namespace '{0}'")]
    MissingIdSpace(&'static str),

    /// Configuration text could not be parsed
    #[error("config error: {0}")]
    Config(#[from] ron::error::SpannedError),
}

impl From<IdSpaceError> for Error {
    fn from(err: IdSpaceError) -> Self {
        Error::Integrity(err.into())
    }
}

impl Error {
    /// Get the integrity error if content broke a table invariant
    pub fn integrity(&self) -> Option<&IntegrityError> {
        match self {
            Error::Integrity(err) => Some(err),
            _ => None,
        }
    }
}

// The built-in catalog is shared across threads, so its errors must be too.
fn _assert_error_send_sync<T: Send + Sync>() {}
fn _error_is_send_sync() {
    _assert_error_send_sync::<Error>();
}
