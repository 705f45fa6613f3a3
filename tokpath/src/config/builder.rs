//! Programmatic configuration assembly.
//!
//! [`ConfigBuilder`] ties the loader, environment overrides, merger and
//! validator together into one call.

use std::env;
use std::path::PathBuf;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builder for the final, merged configuration.
///
/// # Examples
///
/// ```
/// use tokpath::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         platform: Some("linux".into()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.platform().as_str(), "linux");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads files and environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory to start project config and store discovery from.
    ///
    /// Defaults to the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Directory holding the user config and fallback store.
    ///
    /// Defaults to `~/.tokpath`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    /// Do not read configuration files or discover a store.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not apply TOKPATH_* environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Programmatic overrides, applied last.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Load, merge and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, an
    /// environment variable is malformed, or the result fails validation.
    pub fn build(self) -> Result<Config> {
        let working_dir = match self.working_dir {
            Some(dir) => dir,
            None => env::current_dir()?,
        };

        let mut config = if self.skip_files {
            Config::default()
        } else {
            let sources = ConfigLoader::load_all(&working_dir, self.config_dir.as_deref())?;
            for source in &sources {
                log::debug!("loaded configuration from {}", source.path.display());
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        if config.store.is_none() && !self.skip_files {
            config.store = ConfigLoader::discover_store(&working_dir, self.config_dir.as_deref());
            if let Some(ref store) = config.store {
                log::debug!("discovered token store at {}", store.display());
            }
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn isolated(dir: &TempDir) -> ConfigBuilder {
        ConfigBuilder::new()
            .with_working_dir(dir.path())
            .with_config_dir(dir.path().join("user"))
            .skip_env()
    }

    #[test]
    fn test_skip_everything_gives_defaults() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_project_overrides_user() {
        let dir = TempDir::new().unwrap();
        let user = dir.path().join("user");
        fs::create_dir(&user).unwrap();
        fs::write(user.join("config.yaml"), "platform: linux\nmax_depth: 5\n").unwrap();
        fs::write(dir.path().join("tokpath.yaml"), "platform: windows\n").unwrap();

        let config = isolated(&dir).build().unwrap();
        assert_eq!(config.platform, Some("windows".to_string()));
        assert_eq!(config.max_depth, Some(5));
    }

    #[test]
    fn test_overrides_beat_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tokpath.yaml"), "platform: windows\n").unwrap();

        let config = isolated(&dir)
            .with_config(Config {
                platform: Some("darwin".into()),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.platform, Some("darwin".to_string()));
    }

    #[test]
    fn test_store_discovered_when_unset() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("paths.json"), "{}").unwrap();

        let config = isolated(&dir).build().unwrap();
        assert_eq!(config.store, Some(dir.path().join("paths.json")));
    }

    #[test]
    fn test_explicit_store_not_replaced() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("paths.json"), "{}").unwrap();
        let explicit = dir.path().join("other.yaml");

        let config = isolated(&dir)
            .with_config(Config {
                store: Some(explicit.clone()),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.store, Some(explicit));
    }

    #[test]
    fn test_invalid_result_rejected() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                max_depth: Some(0),
                ..Default::default()
            })
            .build();
        assert!(matches!(result, Err(Error::Validation { ref field, .. }) if field == "max_depth"));
    }

    #[test]
    #[serial]
    fn test_env_between_files_and_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tokpath.yaml"), "platform: windows\nmax_depth: 3\n").unwrap();

        let previous = env::var("TOKPATH_PLATFORM").ok();
        env::set_var("TOKPATH_PLATFORM", "darwin");

        let from_env = ConfigBuilder::new()
            .with_working_dir(dir.path())
            .with_config_dir(dir.path().join("user"))
            .build();
        let overridden = ConfigBuilder::new()
            .with_working_dir(dir.path())
            .with_config_dir(dir.path().join("user"))
            .with_config(Config {
                platform: Some("linux".into()),
                ..Default::default()
            })
            .build();

        match previous {
            Some(v) => env::set_var("TOKPATH_PLATFORM", v),
            None => env::remove_var("TOKPATH_PLATFORM"),
        }

        let from_env = from_env.unwrap();
        assert_eq!(from_env.platform, Some("darwin".to_string()));
        assert_eq!(from_env.max_depth, Some(3));
        assert_eq!(overridden.unwrap().platform, Some("linux".to_string()));
    }
}
