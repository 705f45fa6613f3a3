//! Property-based tests for token resolution.

use super::resolver::TokenResolver;
use super::syntax::{is_resolved, is_token, split_segments};
use crate::platform::{Platform, Separator};
use crate::store::MemoryStore;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn literal_segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.:-]{1,8}"
}

fn separator_strategy() -> impl Strategy<Value = Separator> {
    prop_oneof![Just(Separator::Slash), Just(Separator::Backslash)]
}

// Input made of literal segments and tokens, joined by random separators.
fn mixed_input_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            prop_oneof![
                literal_segment_strategy(),
                name_strategy().prop_map(|n| format!("<{n}>")),
            ],
            separator_strategy(),
        ),
        1..6,
    )
    .prop_map(|parts| {
        let mut out = String::new();
        for (i, (segment, sep)) in parts.iter().enumerate() {
            if i > 0 {
                out.push(sep.as_char());
            }
            out.push_str(segment);
        }
        out
    })
}

fn store_strategy() -> impl Strategy<Value = MemoryStore> {
    prop::collection::vec((name_strategy(), literal_segment_strategy()), 0..6).prop_map(
        |entries| {
            entries
                .iter()
                .fold(MemoryStore::new(), |store, (name, value)| {
                    store.with_literal(name, value)
                })
        },
    )
}

fn resolver(store: MemoryStore) -> TokenResolver<MemoryStore> {
    TokenResolver::new(store, Platform::new("linux"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Every output of resolve is free of token syntax
    #[test]
    fn resolved_output_has_no_tokens(store in store_strategy(), input in mixed_input_strategy()) {
        let path = resolver(store).resolve(&input, None).unwrap();
        prop_assert!(is_resolved(path.as_str()));
    }

    // resolve(resolve(x)) == resolve(x)
    #[test]
    fn resolution_idempotent(store in store_strategy(), input in mixed_input_strategy()) {
        let resolver = resolver(store);
        let once = resolver.resolve_str(&input).unwrap();
        let twice = resolver.resolve_str(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    // A declared separator is the only separator in the output
    #[test]
    fn declared_separator_used_throughout(
        store in store_strategy(),
        input in mixed_input_strategy(),
        declared in separator_strategy(),
    ) {
        let full = format!("<{}root>/{input}", declared.as_char());
        let path = resolver(store).resolve(&full, None).unwrap();
        let other = match declared {
            Separator::Slash => '\\',
            Separator::Backslash => '/',
        };
        prop_assert!(!path.as_str().contains(other));
        prop_assert_eq!(path.separator(), Some(declared));
    }

    // A chain t0 -> <t1>/s0 -> ... resolves to the leaf followed by each suffix
    #[test]
    fn nested_chain_expands_fully(
        suffixes in prop::collection::vec(literal_segment_strategy(), 1..6),
        leaf in literal_segment_strategy(),
    ) {
        let mut store = MemoryStore::new();
        for (i, suffix) in suffixes.iter().enumerate() {
            store = store.with_literal(&format!("t{i}"), &format!("<t{}>/{suffix}", i + 1));
        }
        store = store.with_literal(&format!("t{}", suffixes.len()), &leaf);

        let path = resolver(store).resolve("<t0>", Some(Separator::Slash)).unwrap();

        let mut expected = vec![leaf];
        expected.extend(suffixes.into_iter().rev());
        prop_assert_eq!(path.as_str(), expected.join("/"));
    }

    // Segments of a token-free string are never tokens
    #[test]
    fn split_of_literal_has_no_tokens(input in "[a-z/\\\\]{0,30}") {
        for segment in split_segments(&input) {
            prop_assert!(!is_token(segment));
        }
    }
}
