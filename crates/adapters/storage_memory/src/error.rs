//! Storage-specific error types.

use std::path::PathBuf;

use devicedesk_domain::error::DeviceDeskError;

/// Errors originating from the in-memory store at request time.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A writer panicked while holding the request ledger lock.
    #[error("request ledger lock poisoned")]
    LockPoisoned,
}

impl From<StorageError> for DeviceDeskError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Errors raised while loading seed data at startup.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed document is not valid JSON or does not match the schema.
    #[error("failed to parse seed data")]
    Parse(#[from] serde_json::Error),

    /// A seeded device breaks a domain invariant.
    #[error("invalid seed device for user {user_id}")]
    InvalidDevice {
        user_id: String,
        #[source]
        source: DeviceDeskError,
    },
}
