//! Store file parsing.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::platform::Platform;

/// The value a token name maps to.
///
/// # Examples
///
/// ```
/// use tokpath::store::TokenValue;
/// use tokpath::Platform;
///
/// let value: TokenValue =
///     serde_json::from_str(r#"{"windows": "C:\\data", "linux": "/data"}"#).unwrap();
/// let selected = value.select("root", &Platform::new("linux")).unwrap();
/// assert_eq!(selected, "/data");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// A replacement string, which may contain further tokens.
    Literal(String),
    /// Replacement strings keyed by lowercase platform name.
    PerPlatform(BTreeMap<String, String>),
}

impl TokenValue {
    /// Select the replacement string for `platform`.
    ///
    /// `token` is only used to describe a failure.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingPlatformEntry` if this is a per-platform table
    /// without an entry for `platform`.
    pub fn select(&self, token: &str, platform: &Platform) -> Result<String> {
        match self {
            Self::Literal(value) => Ok(value.clone()),
            Self::PerPlatform(table) => {
                table
                    .get(platform.as_str())
                    .cloned()
                    .ok_or_else(|| Error::MissingPlatformEntry {
                        token: token.to_string(),
                        platform: platform.to_string(),
                    })
            }
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

/// Serialization format of a store file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    /// JSON object.
    Json,
    /// YAML mapping.
    Yaml,
}

impl StoreFormat {
    /// Pick the format from a file extension: `.yaml` and `.yml` are YAML,
    /// anything else is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// The parsed contents of a store file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreDocument {
    entries: BTreeMap<String, TokenValue>,
}

impl StoreDocument {
    /// Read and parse a store file.
    ///
    /// # Errors
    ///
    /// Returns `Error::StoreUnavailable` if the file cannot be read and
    /// `Error::InvalidStore` if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::StoreUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents, StoreFormat::from_path(path)).map_err(|message| {
            Error::InvalidStore {
                path: path.to_path_buf(),
                message,
            }
        })
    }

    /// Parse store contents in the given format.
    ///
    /// # Errors
    ///
    /// Returns the parser's message on failure.
    pub fn parse(contents: &str, format: StoreFormat) -> std::result::Result<Self, String> {
        match format {
            StoreFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            StoreFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        }
    }

    /// Get the entry for a token name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.entries.get(name)
    }

    /// Iterate over all entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TokenValue)> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the document, yielding its entries.
    #[must_use]
    pub fn into_entries(self) -> BTreeMap<String, TokenValue> {
        self.entries
    }
}

impl FromIterator<(String, TokenValue)> for StoreDocument {
    fn from_iter<I: IntoIterator<Item = (String, TokenValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
