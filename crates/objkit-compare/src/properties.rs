use proptest::prelude::*;

use objkit_types::arbitrary;
use objkit_types::{Map, Value};

use crate::{deep_equal, flatten};

fn renamed(map: &Map) -> Map {
    map.iter()
        .enumerate()
        .map(|(index, (_, value))| (format!("k{index}"), value.clone()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn value_equals_itself(value in arbitrary::value()) {
        prop_assert!(deep_equal(&[value.clone(), value]));
    }

    #[test]
    fn renaming_top_level_keys_keeps_equality(map in arbitrary::map()) {
        let other = renamed(&map);
        prop_assert!(deep_equal(&[Value::Map(map), Value::Map(other)]));
    }

    #[test]
    fn flattened_leaves_are_never_containers(value in arbitrary::value()) {
        prop_assert!(flatten(&value).iter().all(|leaf| leaf.is_leaf()));
    }

    #[test]
    fn appending_a_leaf_breaks_equality(map in arbitrary::map(), leaf in arbitrary::leaf()) {
        let mut longer = map.clone();
        longer.insert("__extra".to_string(), leaf);
        prop_assert!(!deep_equal(&[Value::Map(map), Value::Map(longer)]));
    }
}
