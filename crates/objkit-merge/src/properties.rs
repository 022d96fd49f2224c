use proptest::prelude::*;

use objkit_types::arbitrary;
use objkit_types::{Map, Value};

use crate::{merge, merge_concat_arrays, merge_replace_arrays, MergePolicy};

fn prefixed(map: Map, prefix: &str) -> Map {
    map.into_iter()
        .map(|(key, value)| (format!("{prefix}{key}"), value))
        .collect()
}

fn any_policy() -> impl Strategy<Value = MergePolicy> {
    prop_oneof![Just(MergePolicy::Concat), Just(MergePolicy::Replace)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn disjoint_maps_merge_to_their_union(
        left in arbitrary::map(),
        right in arbitrary::map(),
        policy in any_policy(),
    ) {
        let left = prefixed(left, "l_");
        let right = prefixed(right, "r_");
        let union: Map = left.clone().into_iter().chain(right.clone()).collect();

        let merged = merge(policy, &[Value::Map(left), Value::Map(right)]);
        prop_assert_eq!(merged, Value::Map(union));
    }

    #[test]
    fn right_scalar_wins(
        base in arbitrary::map(),
        key in "[a-z]{1,3}",
        old in arbitrary::leaf(),
        new in arbitrary::leaf(),
    ) {
        let mut left = base;
        left.insert(key.clone(), old);
        let right: Map = [(key.clone(), new.clone())].into_iter().collect();

        let merged = merge_concat_arrays(&[Value::Map(left), Value::Map(right)]);
        prop_assert_eq!(merged.get(&key), Some(&new));
    }

    #[test]
    fn single_map_is_identity(map in arbitrary::map(), policy in any_policy()) {
        let only = Value::Map(map);
        prop_assert_eq!(merge(policy, std::slice::from_ref(&only)), only);
    }

    #[test]
    fn concat_and_replace_list_lengths(
        prev in prop::collection::vec(arbitrary::leaf(), 0..8),
        next in prop::collection::vec(arbitrary::leaf(), 0..8),
    ) {
        let left: Value = [("k", Value::List(prev.clone()))].into_iter().collect();
        let right: Value = [("k", Value::List(next.clone()))].into_iter().collect();
        let inputs = [left, right];

        let concat = merge_concat_arrays(&inputs);
        let replaced = merge_replace_arrays(&inputs);
        prop_assert_eq!(concat.get("k").map(Value::len), Some(prev.len() + next.len()));
        prop_assert_eq!(replaced.get("k"), Some(&Value::List(next)));
    }

    #[test]
    fn merge_result_is_always_a_map(values in prop::collection::vec(arbitrary::value(), 0..4)) {
        prop_assert!(merge_concat_arrays(&values).as_map().is_some());
    }
}
