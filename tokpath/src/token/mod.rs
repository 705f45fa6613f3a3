//! Token syntax and resolution.
//!
//! A token is a placeholder segment in a path string, written `<name>`. Its
//! value comes from a [`TokenStore`](crate::store::TokenStore) and may itself
//! contain tokens, so resolution repeats until none remain.
//!
//! # Separators
//!
//! Paths are split on `/` and `\`. A token may declare the separator the
//! resolved path should use by placing it right after the opening bracket:
//! `</name>` or `<\name>`. The separator character in that position is not
//! treated as a path separator.
//!
//! # Examples
//!
//! ```
//! use tokpath::store::MemoryStore;
//! use tokpath::token::{is_resolved, is_token};
//! use tokpath::{Platform, TokenResolver};
//!
//! assert!(is_token("<project_root>"));
//! assert!(!is_resolved("<project_root>/src"));
//!
//! let store = MemoryStore::new().with_literal("project_root", "C:/work/site");
//! let resolver = TokenResolver::new(store, Platform::new("windows"));
//!
//! let path = resolver.resolve(r"<\project_root>/src", None).unwrap();
//! assert_eq!(path.as_str(), r"C:\work\site\src");
//! assert_eq!(path.original(), r"<\project_root>/src");
//! ```

pub mod resolver;
pub mod syntax;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use resolver::{TokenResolver, DEFAULT_MAX_DEPTH};
pub use syntax::{
    is_resolved, is_scannable_name, is_token, parse_token, replace_separators, split_segments,
    TokenSpec,
};
pub use types::ResolvedPath;
