//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources.
//! Every field is a scalar, so a higher-precedence value simply replaces a
//! lower one.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use tokpath::config::{Config, ConfigMerger};
///
/// let low = Config { platform: Some("linux".to_string()), ..Default::default() };
/// let high = Config { platform: Some("windows".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.platform, Some("windows".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target where set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.store.is_some() {
            target.store.clone_from(&source.store);
        }

        if source.platform.is_some() {
            target.platform.clone_from(&source.platform);
        }

        if source.separator.is_some() {
            target.separator = source.separator;
        }

        if source.max_depth.is_some() {
            target.max_depth = source.max_depth;
        }

        if source.cache_store.is_some() {
            target.cache_store = source.cache_store;
        }
    }
}
