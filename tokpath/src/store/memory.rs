//! In-memory token store.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::error::Result;
use crate::store::{StoreDocument, TokenStore, TokenValue};

/// A token store held in memory.
///
/// # Examples
///
/// ```
/// use tokpath::store::{MemoryStore, TokenStore, TokenValue};
///
/// let store = MemoryStore::new()
///     .with_literal("a", "<b>/x")
///     .with_platform_values("b", [("linux", "/y"), ("windows", "C:\\y")]);
///
/// assert_eq!(store.lookup("a").unwrap(), TokenValue::from("<b>/x"));
/// assert_eq!(store.lookup("missing").unwrap(), TokenValue::from("missing"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, TokenValue>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a store file once and keep its entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let document = StoreDocument::load(path)?;
        log::debug!(
            "Loaded {} token(s) from {}",
            document.len(),
            path.display()
        );
        Ok(Self::from(document))
    }

    /// Add a literal entry.
    #[must_use]
    pub fn with_literal(mut self, name: &str, value: &str) -> Self {
        self.insert(name, TokenValue::from(value));
        self
    }

    /// Add a per-platform entry.
    #[must_use]
    pub fn with_platform_values<'a>(
        mut self,
        name: &str,
        values: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let table: BTreeMap<String, String> = values
            .into_iter()
            .map(|(platform, value)| (platform.to_lowercase(), value.to_string()))
            .collect();
        self.insert(name, TokenValue::PerPlatform(table));
        self
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, name: &str, value: TokenValue) {
        self.entries.insert(name.to_string(), value);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<StoreDocument> for MemoryStore {
    fn from(document: StoreDocument) -> Self {
        Self {
            entries: document.into_entries().into_iter().collect(),
        }
    }
}

impl TokenStore for MemoryStore {
    fn lookup(&self, name: &str) -> Result<TokenValue> {
        Ok(self
            .entries
            .get(name)
            .cloned()
            .unwrap_or_else(|| TokenValue::Literal(name.to_string())))
    }
}
