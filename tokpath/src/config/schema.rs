//! Configuration schema definitions.
//!
//! This module defines the configuration structure for tokpath: where the
//! token store lives and how resolution behaves.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::platform::{Platform, Separator};
use crate::store::{FileStore, MemoryStore, TokenStore};
use crate::token::{TokenResolver, DEFAULT_MAX_DEPTH};

/// Complete configuration structure.
///
/// Every field is optional so configurations from several sources can be
/// layered; accessors supply the defaults.
///
/// # Examples
///
/// ```
/// use tokpath::config::Config;
/// use tokpath::Separator;
///
/// let config: Config = serde_yaml::from_str(
///     "store: /etc/tokpath/paths.json\nplatform: linux\nseparator: slash\n",
/// )
/// .unwrap();
/// assert_eq!(config.separator, Some(Separator::Slash));
/// assert_eq!(config.platform().as_str(), "linux");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the token store file (JSON or YAML).
    pub store: Option<PathBuf>,

    /// Platform key used for per-platform tokens (defaults to the host).
    pub platform: Option<String>,

    /// Separator to normalize resolved paths to.
    pub separator: Option<Separator>,

    /// Maximum number of expansion passes.
    pub max_depth: Option<usize>,

    /// Load the store once instead of reading it on every lookup.
    pub cache_store: Option<bool>,
}

impl Config {
    /// The configured platform, or the host platform.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
            .as_deref()
            .map_or_else(Platform::host, Platform::new)
    }

    /// The configured expansion bound, or the default.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }

    /// The configured store path, if any.
    #[must_use]
    pub fn store_path(&self) -> Option<&Path> {
        self.store.as_deref()
    }

    /// Open the configured token store.
    ///
    /// # Errors
    ///
    /// Returns an error if no store is configured, or if `cache_store` is set
    /// and the store cannot be loaded.
    pub fn open_store(&self) -> Result<Box<dyn TokenStore>> {
        let path = self.store_path().ok_or_else(|| Error::Validation {
            field: "store".into(),
            message: "no token store configured or found".into(),
        })?;

        if self.cache_store.unwrap_or(false) {
            Ok(Box::new(MemoryStore::load(path)?))
        } else {
            Ok(Box::new(FileStore::new(path)))
        }
    }

    /// Build a resolver from this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened.
    pub fn resolver(&self) -> Result<TokenResolver<Box<dyn TokenStore>>> {
        let resolver = TokenResolver::new(self.open_store()?, self.platform());
        Ok(resolver.with_max_depth(self.max_depth()))
    }
}
