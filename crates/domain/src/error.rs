//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DeviceDeskError`] via `#[from]`.

/// Top-level error shared by the application and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum DeviceDeskError {
    /// Input failed a domain invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested resource does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing 'software_name' in request body")]
    MissingSoftwareName,

    #[error("device id must not be empty")]
    EmptyDeviceId,

    #[error("device model must not be empty")]
    EmptyModel,

    #[error("device kind must be set")]
    MissingDeviceKind,
}

/// A lookup that found nothing.
///
/// Displays as `"<entity> not found"`, which is also the message returned to
/// API callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Human-readable kind of the missing resource (`"User"`, `"Device"`, …).
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}
