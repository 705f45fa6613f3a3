//! Environment variable handling for configuration overrides.
//!
//! This module provides support for TOKPATH_* environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable naming the token store file.
pub const ENV_STORE: &str = "TOKPATH_STORE";
/// Environment variable overriding the platform key.
pub const ENV_PLATFORM: &str = "TOKPATH_PLATFORM";
/// Environment variable setting the output separator.
pub const ENV_SEPARATOR: &str = "TOKPATH_SEPARATOR";
/// Environment variable setting the expansion bound.
pub const ENV_MAX_DEPTH: &str = "TOKPATH_MAX_DEPTH";
/// Environment variable toggling store caching.
pub const ENV_CACHE_STORE: &str = "TOKPATH_CACHE_STORE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use tokpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads all TOKPATH_* environment variables and applies them to the
    /// configuration with higher precedence than file-based configs. Empty
    /// values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric depth, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(store) = Self::var(ENV_STORE) {
            config.store = Some(PathBuf::from(store));
        }

        if let Some(platform) = Self::var(ENV_PLATFORM) {
            config.platform = Some(platform);
        }

        if let Some(separator) = Self::var(ENV_SEPARATOR) {
            config.separator = Some(separator.parse().map_err(|_| Error::Validation {
                field: ENV_SEPARATOR.into(),
                message: format!("Invalid separator: '{separator}' (expected slash or backslash)"),
            })?);
        }

        if let Some(depth) = Self::var(ENV_MAX_DEPTH) {
            config.max_depth = Some(depth.parse().map_err(|_| Error::Validation {
                field: ENV_MAX_DEPTH.into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Some(val) = Self::var(ENV_CACHE_STORE) {
            config.cache_store = Some(Self::parse_bool(ENV_CACHE_STORE, &val)?);
        }

        Ok(())
    }

    /// Read a non-empty environment variable.
    fn var(key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.trim().is_empty())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
