//! Error kinds
//!
//! Operations return `anyhow::Result` and raise a [`RepositoryError`] whenever the
//! failure belongs to a well-known kind. The driver recovers the kind with
//! [`ErrorKind::of`] to pick the diagnostic and the exit status.

use thiserror::Error;

/// Errors raised by repository operations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A file, object or branch is missing
    #[error("{what} not found: {name}")]
    NotFound { what: &'static str, name: String },

    /// A stored document could not be parsed
    #[error("corrupt {what}: {reason}")]
    Corrupt { what: String, reason: String },

    /// The access mediator refused the operation
    #[error("access denied: {0}")]
    Denied(String),

    /// The invocation cannot be honored as given
    #[error("{0}")]
    UserError(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RepositoryError {
    pub fn not_found(what: &'static str, name: impl Into<String>) -> Self {
        RepositoryError::NotFound {
            what,
            name: name.into(),
        }
    }

    pub fn corrupt(what: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        RepositoryError::Corrupt {
            what: what.into(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Corrupt,
    Io,
    Denied,
    UserError,
}

impl ErrorKind {
    /// Classify an error by walking its cause chain
    ///
    /// The outermost [`RepositoryError`] wins. Plain I/O errors map to `NotFound`
    /// when the file is missing and to `Io` otherwise, JSON errors map to `Corrupt`.
    /// Anything else is reported as `Io`, since every remaining failure comes from
    /// the file system.
    pub fn of(error: &anyhow::Error) -> Self {
        for cause in error.chain() {
            if let Some(error) = cause.downcast_ref::<RepositoryError>() {
                return match error {
                    RepositoryError::NotFound { .. } => ErrorKind::NotFound,
                    RepositoryError::Corrupt { .. } => ErrorKind::Corrupt,
                    RepositoryError::Denied(_) => ErrorKind::Denied,
                    RepositoryError::UserError(_) => ErrorKind::UserError,
                    RepositoryError::Io(_) => ErrorKind::Io,
                };
            }
        }

        for cause in error.chain() {
            if let Some(error) = cause.downcast_ref::<std::io::Error>() {
                return match error.kind() {
                    std::io::ErrorKind::NotFound => ErrorKind::NotFound,
                    _ => ErrorKind::Io,
                };
            }
            if cause.downcast_ref::<serde_json::Error>().is_some() {
                return ErrorKind::Corrupt;
            }
        }

        ErrorKind::Io
    }
}
