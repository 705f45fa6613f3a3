//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, store and resolver construction, and
//! output formatting.

use crate::error::CliError;
use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;
use tokpath::store::TokenStore;
use tokpath::{Config, ConfigBuilder, TokenResolver};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Token store file override.
    pub store: Option<PathBuf>,

    /// Platform key override.
    pub platform: Option<String>,
}

/// Output format shared by commands that print structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One value per line
    Plain,
    /// JSON
    Json,
    /// YAML
    Yaml,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let overrides = Config {
        store: global.store.clone(),
        platform: global.platform.clone(),
        ..Default::default()
    };

    let config = ConfigBuilder::new()
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    match config.store_path() {
        Some(store) => log::debug!("Using token store {}", store.display()),
        None => log::debug!("No token store configured"),
    }

    Ok(config)
}

/// Open the configured token store.
///
/// # Errors
///
/// Returns `NoStore` if neither configuration nor discovery found a store.
pub fn open_store(config: &Config) -> Result<Box<dyn TokenStore>, CliError> {
    if config.store_path().is_none() {
        return Err(CliError::NoStore);
    }
    config.open_store().map_err(CliError::from)
}

/// Build a resolver from the configured store and platform.
pub fn open_resolver(config: &Config) -> Result<TokenResolver<Box<dyn TokenStore>>, CliError> {
    if config.store_path().is_none() {
        return Err(CliError::NoStore);
    }
    config.resolver().map_err(CliError::from)
}

/// Serialize `value` as JSON or YAML and print it.
///
/// `Plain` is the caller's responsibility and is rejected here.
pub fn print_structured<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> Result<(), CliError> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| CliError::InvalidArguments(format!("Cannot encode JSON: {e}")))?,
        OutputFormat::Yaml => serde_yaml::to_string(value)
            .map_err(|e| CliError::InvalidArguments(format!("Cannot encode YAML: {e}")))?,
        OutputFormat::Plain => {
            return Err(CliError::InvalidArguments(
                "plain output has no structured form".to_string(),
            ))
        }
    };

    println!("{}", rendered.trim_end());
    Ok(())
}
