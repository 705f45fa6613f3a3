//! File-backed token store.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::store::{StoreDocument, TokenStore, TokenValue};

/// A token store that reads its file on every lookup.
///
/// Edits to the file are visible to the next lookup. Wrap the file in a
/// [`MemoryStore`](crate::store::MemoryStore) instead when repeated reads
/// matter.
///
/// # Examples
///
/// ```no_run
/// use tokpath::store::{FileStore, TokenStore};
///
/// let store = FileStore::new("paths.json");
/// let value = store.lookup("project_root").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by `path`. The file is not read until the first
    /// lookup.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileStore {
    fn lookup(&self, name: &str) -> Result<TokenValue> {
        log::debug!("Reading token '{name}' from {}", self.path.display());
        let document = StoreDocument::load(&self.path)?;

        Ok(document
            .get(name)
            .cloned()
            .unwrap_or_else(|| TokenValue::Literal(name.to_string())))
    }
}
