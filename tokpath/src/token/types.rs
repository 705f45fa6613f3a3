//! Result type for token resolution.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::platform::Separator;

/// A fully resolved string together with the input it came from.
///
/// # Examples
///
/// ```
/// use tokpath::{ResolvedPath, Separator};
///
/// let path = ResolvedPath::new(
///     "/srv/data/logs".to_string(),
///     "<data>/logs".to_string(),
///     Some(Separator::Slash),
/// );
/// assert_eq!(path.as_str(), "/srv/data/logs");
/// assert_eq!(path.original(), "<data>/logs");
/// assert!(path.was_expanded());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedPath {
    /// The string with every token expanded.
    resolved: String,
    /// The input before resolution.
    original: String,
    /// The separator joining resolved segments, if one was established.
    separator: Option<Separator>,
}

impl ResolvedPath {
    /// Create a new resolved path record.
    #[must_use]
    pub fn new(resolved: String, original: String, separator: Option<Separator>) -> Self {
        Self {
            resolved,
            original,
            separator,
        }
    }

    /// The resolved string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.resolved
    }

    /// The input before resolution.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The separator used for the resolved string.
    ///
    /// `None` when the input was already resolved and no separator was
    /// requested; in that case the input is returned untouched.
    #[must_use]
    pub fn separator(&self) -> Option<Separator> {
        self.separator
    }

    /// Whether resolution changed the input.
    #[must_use]
    pub fn was_expanded(&self) -> bool {
        self.resolved != self.original
    }

    /// Convert into the resolved `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.resolved
    }

    /// Convert into a `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        PathBuf::from(self.resolved)
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolved)
    }
}

impl AsRef<str> for ResolvedPath {
    fn as_ref(&self) -> &str {
        &self.resolved
    }
}

impl From<ResolvedPath> for String {
    fn from(path: ResolvedPath) -> Self {
        path.resolved
    }
}
