//! Host platform identification and path separators.
//!
//! A [`Platform`] is the lowercase operating system name used as the key into
//! per-platform token tables. A [`Separator`] is one of the two path separator
//! characters the resolver understands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lowercase operating system name used to select per-platform token values.
///
/// # Examples
///
/// ```
/// use tokpath::Platform;
///
/// let platform = Platform::new("Linux");
/// assert_eq!(platform.as_str(), "linux");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform(String);

impl Platform {
    /// Create a platform identifier, lowercasing the name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    /// The platform the current process runs on.
    ///
    /// Rust reports macOS as `macos`; store files conventionally key it as
    /// `darwin`, so that name is used instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokpath::Platform;
    ///
    /// let host = Platform::host();
    /// assert!(!host.as_str().is_empty());
    /// ```
    #[must_use]
    pub fn host() -> Self {
        match std::env::consts::OS {
            "macos" => Self::new("darwin"),
            other => Self::new(other),
        }
    }

    /// The platform name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::host()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A path separator character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// Forward slash, `/`.
    #[serde(alias = "/")]
    Slash,
    /// Backslash, `\`.
    #[serde(alias = "\\")]
    Backslash,
}

impl Separator {
    /// The host's native separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokpath::Separator;
    ///
    /// assert_eq!(Separator::native().as_char(), std::path::MAIN_SEPARATOR);
    /// ```
    #[must_use]
    pub fn native() -> Self {
        if std::path::MAIN_SEPARATOR == '\\' {
            Self::Backslash
        } else {
            Self::Slash
        }
    }

    /// Map a character to a separator, if it is one.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '/' => Some(Self::Slash),
            '\\' => Some(Self::Backslash),
            _ => None,
        }
    }

    /// The separator character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Slash => '/',
            Self::Backslash => '\\',
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Separator {
    type Err = Error;

    /// Accepts the literal characters or the names `slash` / `backslash`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "/" | "slash" => Ok(Self::Slash),
            "\\" | "backslash" => Ok(Self::Backslash),
            _ => Err(Error::Validation {
                field: "separator".into(),
                message: format!(
                    "invalid separator '{s}' (expected '/', '\\', slash or backslash)"
                ),
            }),
        }
    }
}
