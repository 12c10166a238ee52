//! Common error types used across the workspace.
//!
//! Each concern owns a typed error; [`CorpdashError`] aggregates them via
//! `#[from]` so adapters can map a single type onto their own surface.

/// Top-level error for the dashboard.
#[derive(Debug, thiserror::Error)]
pub enum CorpdashError {
    #[error("authentication error")]
    Auth(#[from] AuthError),

    #[error("storage error")]
    Storage(#[from] StorageError),

    #[error("session error")]
    Session(#[from] SessionError),

    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// Login failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No credential in the policy matched the submitted pair.
    #[error("Nieprawidłowe dane logowania")]
    InvalidCredentials,
}

/// Key-value storage failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backing store cannot be reached at all (disabled, quota, sandbox).
    #[error("storage is unavailable")]
    Unavailable,

    /// A read of `key` failed.
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },

    /// A write or removal of `key` failed.
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// A persisted session value that cannot be trusted.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session is not valid json")]
    Malformed(#[from] serde_json::Error),

    #[error("session has no username")]
    MissingUsername,
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("username must not be empty")]
    EmptyUsername,

    #[error("password must not be empty")]
    EmptyPassword,

    #[error("duplicate credential for user {0}")]
    DuplicateUsername(String),
}
