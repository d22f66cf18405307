//! Error types for the admin table plugin.
//!
//! This module defines the centralized error type [`AdminTableError`] and a type
//! alias [`Result`] used throughout the crate. None of these errors ever reach
//! the user: the plugin shim and the event handler log them and carry on.

use thiserror::Error;

/// The main error type for admin table operations.
///
/// # Examples
///
/// ```
/// use admintable::domain::AdminTableError;
///
/// let err = AdminTableError::StaleIdentity { identity: 12, len: 10 };
/// assert_eq!(err.to_string(), "Stale record identity 12 (record set holds 10)");
/// ```
#[derive(Debug, Error)]
pub enum AdminTableError {
    /// The data source answered with a non-success HTTP status.
    #[error("Data source returned HTTP {status}")]
    Fetch {
        /// HTTP status code returned by the endpoint.
        status: u16,
    },

    /// The data source body is not valid JSON.
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// The JSON body is valid but is not an array of flat objects.
    #[error("Malformed dataset: {0}")]
    Dataset(String),

    /// A positional identity no longer points inside the record set.
    ///
    /// Raised after deletions have shifted positions under a row or selection
    /// that still carries the old index.
    #[error("Stale record identity {identity} (record set holds {len})")]
    StaleIdentity {
        /// The identity that was looked up.
        identity: usize,
        /// Record set length at the time of the lookup.
        len: usize,
    },

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for admin table operations.
pub type Result<T> = std::result::Result<T, AdminTableError>;
