//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated environment for running the `tokpath`
//! binary: a temporary working directory, a private HOME, and no TOKPATH_*
//! variables inherited from the caller.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A store with literal, per-platform and nested tokens.
#[allow(dead_code)]
pub const SAMPLE_STORE: &str = r#"{
    "root": {"linux": "/srv/data", "darwin": "/Volumes/data", "windows": "D:\\data"},
    "logs": "<root>/logs",
    "win_logs": "<\\logs>",
    "tool": "bin/tool",
    "linux_only": {"linux": "/opt/only"}
}"#;

const ENV_VARS: [&str; 6] = [
    "TOKPATH_STORE",
    "TOKPATH_PLATFORM",
    "TOKPATH_SEPARATOR",
    "TOKPATH_MAX_DEPTH",
    "TOKPATH_CACHE_STORE",
    "TOKPATH_LOG_MODE",
];

/// Isolated test environment.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory the binary runs in
    pub work_dir: PathBuf,
    /// Fake home directory
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create an empty environment with no store.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let work_dir = temp_dir.path().join("work");
        let home_dir = temp_dir.path().join("home");
        fs::create_dir_all(&work_dir).expect("Failed to create work dir");
        fs::create_dir_all(&home_dir).expect("Failed to create home dir");

        Self {
            temp_dir,
            work_dir,
            home_dir,
        }
    }

    /// Create an environment with `SAMPLE_STORE` as `paths.json` in the
    /// working directory.
    pub fn with_sample_store() -> Self {
        let env = Self::new();
        env.write("paths.json", SAMPLE_STORE);
        env
    }

    /// Write a file relative to the working directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// The working directory.
    pub fn path(&self) -> &Path {
        &self.work_dir
    }

    /// A command for the binary, isolated from the caller's environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tokpath").expect("Failed to find tokpath binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", &self.home_dir)
            .env("USERPROFILE", &self.home_dir);
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command preset to the linux platform.
    pub fn linux(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--platform").arg("linux");
        cmd
    }

    /// Run `resolve` for one input and return trimmed stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn resolve(&self, input: &str, separator: &str) -> String {
        let output = self
            .linux()
            .arg("resolve")
            .arg(input)
            .arg("--separator")
            .arg(separator)
            .output()
            .expect("Failed to run resolve command");

        assert!(
            output.status.success(),
            "Resolve failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }
}
