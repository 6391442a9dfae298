//! Property-based tests for the memoizing wrappers.

use bigoh::{compute, compute_memoized, compute_memoized_recursive, FactorialCache};
use proptest::prelude::*;
use std::collections::BTreeSet;

// A cache holding correct factorials for an arbitrary subset of 0..=20.
fn prior_cache() -> impl Strategy<Value = FactorialCache> {
    prop::collection::btree_set(0i64..=20, 0..10).prop_map(|keys| {
        keys.into_iter()
            .map(|n| (n, compute(n).unwrap()))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_memoized_matches_plain(mut cache in prior_cache(), n in -5i64..30) {
        prop_assert_eq!(compute_memoized(n, &mut cache), compute(n));
        prop_assert_eq!(compute_memoized_recursive(n, &mut cache), compute(n));
    }

    #[test]
    fn prop_cache_holds_distinct_successful_requests(requests in prop::collection::vec(-3i64..25, 0..40)) {
        let mut cache = FactorialCache::new();
        for &n in &requests {
            let _ = compute_memoized(n, &mut cache);
        }
        let expected: BTreeSet<i64> = requests.iter().copied().filter(|n| (0..=20).contains(n)).collect();
        let keys: BTreeSet<i64> = cache.keys().copied().collect();
        prop_assert_eq!(keys, expected);
        for (n, v) in &cache {
            prop_assert_eq!(Ok(*v), compute(*n));
        }
    }

    #[test]
    fn prop_recursive_fills_prefix(requests in prop::collection::vec(0i64..=20, 1..10)) {
        let mut cache = FactorialCache::new();
        for &n in &requests {
            compute_memoized_recursive(n, &mut cache).unwrap();
        }
        let max = requests.iter().copied().max().unwrap_or(0);
        prop_assert_eq!(cache.len() as i64, max + 1);
    }
}
