//! Configuration and store file discovery and loading.
//!
//! This module handles discovering and loading tokpath configuration files
//! and token store files from various locations with proper precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "tokpath.yaml";

/// Name of the user configuration file inside the config directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Store file names searched for, in order of preference.
pub const STORE_FILE_NAMES: [&str; 3] = ["paths.json", "paths.yaml", "paths.yml"];

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use tokpath::config::ConfigSource;
/// use std::path::PathBuf;
///
/// // User config has lowest precedence
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.tokpath/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use tokpath::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.tokpath/config.yaml` (precedence 1)
    /// 2. The nearest `tokpath.yaml` walking up from `working_dir` (precedence 2)
    ///
    /// The `config_dir` parameter overrides where the user config is loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, config_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(config_dir)? {
            sources.push(user_config);
        }

        if let Some(project_config) = Self::discover_project_config(working_dir)? {
            sources.push(project_config);
        }

        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// Load user configuration file.
    ///
    /// A missing home directory is treated as "no user config" rather than
    /// an error.
    fn load_user_config(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let dir = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => match default_config_dir() {
                Ok(dir) => dir,
                Err(_) => return Ok(None),
            },
        };

        let config_path = dir.join(USER_CONFIG_FILE);
        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Find the nearest project configuration by walking up directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let Some(path) = find_upwards(start_dir, &[PROJECT_CONFIG_FILE]) else {
            return Ok(None);
        };

        let config = Self::load_file(&path)?;
        Ok(Some(ConfigSource {
            path,
            precedence: 2,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// A relative `store` path is taken relative to the file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;

        let mut config: Config = serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })?;

        if let (Some(store), Some(base)) = (&config.store, path.parent()) {
            if store.is_relative() {
                config.store = Some(base.join(store));
            }
        }

        Ok(config)
    }

    /// Find the token store file to use when none is configured.
    ///
    /// Walks up from `start_dir` looking for `paths.json`, `paths.yaml` or
    /// `paths.yml`, then checks the same names in the config directory.
    /// Returns `None` if nothing exists.
    #[must_use]
    pub fn discover_store(start_dir: &Path, config_dir: Option<&Path>) -> Option<PathBuf> {
        if let Some(found) = find_upwards(start_dir, &STORE_FILE_NAMES) {
            return Some(found);
        }

        let dir = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_config_dir().ok()?,
        };

        STORE_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    }
}

/// Default user configuration directory: `~/.tokpath`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_config_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".tokpath"))
}

/// Walk up from `start_dir` and return the first existing file named in
/// `names`, checking names in order within each directory.
fn find_upwards(start_dir: &Path, names: &[&str]) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = names
            .iter()
            .map(|name| current.join(name))
            .find(|candidate| candidate.is_file())
        {
            return Some(found);
        }

        if !current.pop() {
            return None;
        }
    }
}
