//! Error types for the tokpath library.
//!
//! This module provides the error hierarchy for token resolution, token
//! stores and configuration loading, using `thiserror` for ergonomic error
//! handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a tokpath error.
///
/// # Examples
///
/// ```
/// use tokpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/data".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tokpath library.
///
/// An unknown token name is deliberately absent from this enum: it resolves
/// to its own bare name instead of failing.
#[derive(Debug, Error)]
pub enum Error {
    /// A token maps to a per-platform table with no entry for the host.
    #[error("token '{token}' has no entry for platform '{platform}'")]
    MissingPlatformEntry {
        /// The token name that was looked up.
        token: String,
        /// The platform key that was missing.
        platform: String,
    },

    /// The token store source could not be read.
    #[error("token store unavailable at {}: {source}", path.display())]
    StoreUnavailable {
        /// Path of the store source.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The token store source was read but could not be parsed.
    #[error("invalid token store {}: {message}", path.display())]
    InvalidStore {
        /// Path of the store source.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// Resolution needed more passes than the configured maximum depth.
    ///
    /// This is how cyclic token references surface.
    #[error("token expansion exceeded {depth} passes while resolving '{input}'")]
    ExpansionDepthExceeded {
        /// The depth limit that was hit.
        depth: usize,
        /// The string that was being resolved when the limit was reached.
        input: String,
    },

    /// The input still contains token syntax, but none of it forms a whole
    /// segment that could be expanded.
    #[error("unresolvable token text in '{input}'")]
    StalledToken {
        /// The string that could not make progress.
        input: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error is a missing platform entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokpath::Error;
    ///
    /// let err = Error::MissingPlatformEntry {
    ///     token: "root".to_string(),
    ///     platform: "linux".to_string(),
    /// };
    /// assert!(err.is_missing_platform());
    /// ```
    #[must_use]
    pub fn is_missing_platform(&self) -> bool {
        matches!(self, Self::MissingPlatformEntry { .. })
    }

    /// Check if error means the store source could not be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::StoreUnavailable {
    ///     path: PathBuf::from("/missing/paths.json"),
    ///     source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    /// };
    /// assert!(err.is_store_unavailable());
    /// ```
    #[must_use]
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. })
    }
}
