//! Configuration system for tokpath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `tokpath.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Token store discovery and validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (TOKPATH_*)
//! 3. Project config (nearest `tokpath.yaml` walking up)
//! 4. User config (`~/.tokpath/config.yaml`)
//! 5. Built-in defaults
//!
//! When no store is configured, the nearest `paths.json`, `paths.yaml` or
//! `paths.yml` is used, falling back to the user config directory.
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use tokpath::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir("/path/to/project")
//!     .build()
//!     .unwrap();
//!
//! let resolver = config.resolver().unwrap();
//! println!("{}", resolver.resolve_str("<root>/logs").unwrap());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_config_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
