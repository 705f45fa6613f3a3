//! Configuration and token store validation.
//!
//! This module checks merged configuration values and the contents of token
//! store files before they are used for resolution.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::store::{StoreDocument, TokenValue};
use crate::token::is_scannable_name;

/// Validates configuration and store documents.
///
/// # Examples
///
/// ```
/// use tokpath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the platform name is blank or contains
    /// whitespace, or if `max_depth` is zero.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref platform) = config.platform {
            Self::validate_identifier("platform", platform)?;
            if platform.trim().contains(char::is_whitespace) {
                return Err(Error::Validation {
                    field: "platform".into(),
                    message: "Cannot contain whitespace".into(),
                });
            }
        }

        if config.max_depth == Some(0) {
            return Err(Error::Validation {
                field: "max_depth".into(),
                message: "Must be greater than zero".into(),
            });
        }

        Ok(())
    }

    /// Validate the entries of a token store.
    ///
    /// Every name must be usable inside `<...>`, and every per-platform table
    /// must be non-empty with lowercase platform keys.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending entry.
    pub fn validate_store(document: &StoreDocument) -> Result<()> {
        for (name, value) in document.iter() {
            Self::validate_identifier("token", name)?;
            if !is_scannable_name(name) {
                return Err(Error::Validation {
                    field: format!("token '{name}'"),
                    message: "Cannot contain whitespace, '<', '>', '/' or '\\'".into(),
                });
            }

            if let TokenValue::PerPlatform(table) = value {
                if table.is_empty() {
                    return Err(Error::Validation {
                        field: format!("token '{name}'"),
                        message: "Platform table cannot be empty".into(),
                    });
                }

                for platform in table.keys() {
                    if platform.trim().is_empty() {
                        return Err(Error::Validation {
                            field: format!("token '{name}'"),
                            message: "Platform key cannot be empty".into(),
                        });
                    }
                    if *platform != platform.to_lowercase() {
                        return Err(Error::Validation {
                            field: format!("token '{name}'"),
                            message: format!("Platform key '{platform}' must be lowercase"),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Validate a string identifier.
    fn validate_identifier(field: &str, value: &str) -> Result<()> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        if trimmed.len() > 255 {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot exceed 255 characters".into(),
            });
        }

        Ok(())
    }
}
