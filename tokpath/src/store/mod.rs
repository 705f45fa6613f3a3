//! Token stores: the lookup tables behind token resolution.
//!
//! A store maps a token name to either a literal replacement or a table of
//! per-platform replacements. Names missing from a store resolve to
//! themselves.
//!
//! Two implementations are provided:
//!
//! - [`FileStore`] reads its JSON or YAML source on every lookup.
//! - [`MemoryStore`] keeps entries in memory, optionally loaded once from a
//!   file.
//!
//! # Store file format
//!
//! ```json
//! {
//!     "project_root": "<drive>/projects/site",
//!     "drive": { "windows": "C:", "linux": "/mnt/c", "darwin": "/Volumes/C" }
//! }
//! ```

mod document;
mod file;
mod memory;

pub use document::{StoreDocument, StoreFormat, TokenValue};
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// A source of token values.
///
/// Implementations return [`TokenValue::Literal`] holding the name itself
/// when the name is unknown.
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore {
    /// Look up the value for a token name.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source cannot be read or parsed.
    fn lookup(&self, name: &str) -> Result<TokenValue>;
}

impl<S: TokenStore + ?Sized> TokenStore for &S {
    fn lookup(&self, name: &str) -> Result<TokenValue> {
        (**self).lookup(name)
    }
}

impl<S: TokenStore + ?Sized> TokenStore for Box<S> {
    fn lookup(&self, name: &str) -> Result<TokenValue> {
        (**self).lookup(name)
    }
}
