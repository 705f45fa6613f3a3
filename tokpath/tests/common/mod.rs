//! Common test utilities for integration tests.
//!
//! This module provides store fixtures backed by temporary files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tokpath::store::FileStore;
use tokpath::{Platform, TokenResolver};

/// A sample store exercising literals, per-platform values and nesting.
#[allow(dead_code)]
pub const SAMPLE_STORE_JSON: &str = r#"{
    "root": {"linux": "/srv/data", "darwin": "/Volumes/data", "windows": "D:\\data"},
    "logs": "<root>/logs",
    "archive": "<\\logs>/archive",
    "relative": "build/out",
    "linux_only": {"linux": "/opt/tool"}
}"#;

/// The sample store in YAML form.
#[allow(dead_code)]
pub const SAMPLE_STORE_YAML: &str = r#"
root:
  linux: /srv/data
  darwin: /Volumes/data
  windows: 'D:\data'
logs: <root>/logs
archive: <\logs>/archive
relative: build/out
linux_only:
  linux: /opt/tool
"#;

/// A temporary directory holding a token store file.
///
/// The directory is removed when the fixture is dropped.
pub struct StoreFixture {
    dir: TempDir,
    path: PathBuf,
}

#[allow(dead_code)]
impl StoreFixture {
    /// Write `contents` to a store file named `file_name`.
    pub fn new(file_name: &str, contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(file_name);
        fs::write(&path, contents).expect("write store file");
        Self { dir, path }
    }

    /// The sample store as `paths.json`.
    pub fn sample_json() -> Self {
        Self::new("paths.json", SAMPLE_STORE_JSON)
    }

    /// The sample store as `paths.yaml`.
    pub fn sample_yaml() -> Self {
        Self::new("paths.yaml", SAMPLE_STORE_YAML)
    }

    /// Path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The temporary directory containing the store.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Replace the store file's contents.
    pub fn rewrite(&self, contents: &str) {
        fs::write(&self.path, contents).expect("rewrite store file");
    }

    /// A resolver reading this store for `platform`.
    pub fn resolver(&self, platform: &str) -> TokenResolver<FileStore> {
        TokenResolver::new(FileStore::new(&self.path), Platform::new(platform))
    }
}
