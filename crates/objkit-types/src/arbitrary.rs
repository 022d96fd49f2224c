//! `proptest` strategies for [`Value`] trees.
//!
//! Numbers are drawn from small integers so generated trees never contain
//! `NaN` and always compare equal to themselves.

use proptest::prelude::*;

use crate::value::{Map, Value};

/// Any leaf: undefined, null, booleans, small integers, short strings.
pub fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i32..1000).prop_map(|n| Value::Number(f64::from(n))),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

/// Arbitrary nested values, up to four levels deep.
pub fn value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::List),
            map_of(inner).prop_map(Value::Map),
        ]
    })
}

/// A keyed map whose values are arbitrary nested values.
pub fn map() -> impl Strategy<Value = Map> {
    map_of(value())
}

fn map_of(values: impl Strategy<Value = Value>) -> impl Strategy<Value = Map> {
    prop::collection::vec(("[a-z]{1,3}", values), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}
