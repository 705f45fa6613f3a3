#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tokpath
//!
//! A library for expanding symbolic path tokens into concrete paths.
//!
//! A path such as `<root>/logs/<\date>` is split on its separators, and each
//! segment of the form `<name>` (optionally `</name>` or `<\name>`) is looked
//! up in a token store. Values may themselves contain tokens and may differ by
//! platform. The resolved path is normalized to a single separator.
//!
//! ## Core Types
//!
//! - [`TokenResolver`] and [`ResolvedPath`]: Token expansion
//! - [`TokenStore`](store::TokenStore), [`FileStore`](store::FileStore) and
//!   [`MemoryStore`](store::MemoryStore): Token sources
//! - [`Platform`] and [`Separator`]: Platform selection and separators
//! - [`Config`] and [`ConfigBuilder`]: Hierarchical configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use tokpath::store::MemoryStore;
//! use tokpath::{Platform, Separator, TokenResolver};
//!
//! let store = MemoryStore::new()
//!     .with_platform_values("root", [("linux", "/srv/data"), ("windows", "D:\\data")])
//!     .with_literal("logs", "<root>/logs");
//!
//! let resolver = TokenResolver::new(store, Platform::new("linux"));
//! let path = resolver.resolve("<logs>/today", Some(Separator::Slash)).unwrap();
//! assert_eq!(path.as_str(), "/srv/data/logs/today");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod store;
pub mod token;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use platform::{Platform, Separator};
pub use token::{ResolvedPath, TokenResolver};
