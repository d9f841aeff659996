//! Error types for the employee directory.
//!
//! This module defines the centralized error type [`DirectoryError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Errors that occur inside the worker are flattened into an [`ErrorKind`] plus a
//! message so they can travel back to the controller inside a
//! [`WorkerResponse`](crate::worker::WorkerResponse).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for directory operations.
///
/// This enum consolidates all error conditions that can occur while loading,
/// editing, exporting, or deleting employee records. Store and network failures
/// never escape the controller: they are converted into user-visible
/// notifications by the event handler.
///
/// # Examples
///
/// ```
/// use employee_directory::DirectoryError;
///
/// fn require_department(department: &str) -> Result<(), DirectoryError> {
///     if department.is_empty() {
///         return Err(DirectoryError::Validation {
///             field: "department".to_string(),
///             message: "Department is required".to_string(),
///         });
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The record store could not be reached or the list query failed.
    ///
    /// The full-set snapshot is left unchanged when this occurs.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A required field is missing or malformed on create or update.
    ///
    /// Carries the first failing field and its user-facing message. No write is
    /// attempted when validation fails.
    #[error("{message}")]
    Validation {
        /// Name of the failing field (e.g. `first_name`).
        field: String,
        /// User-facing message for the field.
        message: String,
    },

    /// The targeted record is no longer present in the store.
    ///
    /// Surfacing this error also triggers a refetch so the stale entry
    /// disappears from the view.
    #[error("Employee not found: {0}")]
    NotFound(String),

    /// Uploading a profile picture to blob storage failed.
    ///
    /// Never blocks the rest of a save operation.
    #[error("Upload error: {0}")]
    Upload(String),

    /// The session role does not allow the requested operation.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Reading from or writing to the storage backend failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the current view to CSV failed.
    #[error("Export error: {0}")]
    Export(String),

    /// Communication with the store worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Serializable classification of a [`DirectoryError`].
///
/// Used to carry errors across the worker boundary, where the original error
/// value (which may wrap an `io::Error`) cannot be cloned or serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    Fetch,
    Validation,
    NotFound,
    Upload,
    PermissionDenied,
    Storage,
    Io,
    Export,
    Worker,
    Config,
}

impl DirectoryError {
    /// Returns the serializable kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Fetch(_) => ErrorKind::Fetch,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Upload(_) => ErrorKind::Upload,
            Self::PermissionDenied(_) => ErrorKind::PermissionDenied,
            Self::Storage(_) => ErrorKind::Storage,
            Self::Io(_) => ErrorKind::Io,
            Self::Export(_) => ErrorKind::Export,
            Self::Worker(_) => ErrorKind::Worker,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Shorthand for a validation error on `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<csv::Error> for DirectoryError {
    fn from(e: csv::Error) -> Self {
        Self::Export(e.to_string())
    }
}

/// A specialized `Result` type for directory operations.
///
/// This is a type alias for `std::result::Result<T, DirectoryError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, DirectoryError>;
