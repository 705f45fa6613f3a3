//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::Config;
use crate::platform::Separator;
use proptest::prelude::*;
use std::path::PathBuf;

fn separator_strategy() -> impl Strategy<Value = Separator> {
    prop_oneof![Just(Separator::Slash), Just(Separator::Backslash)]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[a-z]{1,10}\\.json"),
        prop::option::of("[a-z]{1,10}"),
        prop::option::of(separator_strategy()),
        prop::option::of(1usize..512),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(store, platform, separator, max_depth, cache_store)| Config {
            store: store.map(PathBuf::from),
            platform,
            separator,
            max_depth,
            cache_store,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Each field comes from the higher source when set, else the lower
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.store, high.store.or(low.store));
        prop_assert_eq!(merged.platform, high.platform.or(low.platform));
        prop_assert_eq!(merged.separator, high.separator.or(low.separator));
        prop_assert_eq!(merged.max_depth, high.max_depth.or(low.max_depth));
        prop_assert_eq!(merged.cache_store, high.cache_store.or(low.cache_store));
    }

    // Merging a config into itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Merging into the default yields the source
    #[test]
    fn config_merge_into_default(config in config_strategy()) {
        let mut merged = Config::default();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }
}
