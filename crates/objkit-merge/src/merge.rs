//! Deep merge of structured values.
//!
//! Inputs are folded left to right into a fresh map. At every key:
//!
//! - list over list combines according to the [`MergePolicy`],
//! - map over map merges recursively under the same policy,
//! - anything else is overwritten by the right operand (this also covers
//!   keys the accumulator has not seen yet).
//!
//! Nothing is validated. Operands that are not maps degrade to overwrite
//! semantics: a list contributes its indices as keys, a leaf contributes
//! nothing. Merging therefore needs at least one map-shaped operand to be
//! meaningful.

use tracing::{debug, trace};

use objkit_types::{Map, Value};

use crate::policy::MergePolicy;

/// Deep-merge `values` left to right under `policy`.
///
/// The result is always a [`Value::Map`]; no input is modified. Zero inputs
/// give an empty map and a single map input gives an independent copy.
///
/// # Examples
///
/// ```rust
/// use objkit_merge::{merge, MergePolicy};
/// use objkit_types::Value;
/// use serde_json::json;
///
/// let left = Value::from(json!({"a": 1, "b": {"x": 10}, "tags": ["x"]}));
/// let right = Value::from(json!({"b": {"y": 20}, "tags": ["y"]}));
///
/// let merged = merge(MergePolicy::Concat, &[left, right]);
/// let expected = Value::from(json!({"a": 1, "b": {"x": 10, "y": 20}, "tags": ["x", "y"]}));
/// assert_eq!(merged, expected);
/// ```
pub fn merge(policy: MergePolicy, values: &[Value]) -> Value {
    debug!(operands = values.len(), %policy, "deep merge");
    Value::Map(merge_all(policy, values))
}

/// Deep merge appending lists found at the same key.
pub fn merge_concat_arrays(values: &[Value]) -> Value {
    merge(MergePolicy::Concat, values)
}

/// Deep merge where a list at a key replaces the previous list wholesale.
pub fn merge_replace_arrays(values: &[Value]) -> Value {
    merge(MergePolicy::Replace, values)
}

fn merge_all<'a, I>(policy: MergePolicy, values: I) -> Map
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut acc = Map::new();
    for value in values {
        merge_into(&mut acc, value, policy);
    }
    acc
}

/// Fold one operand into the accumulator.
fn merge_into(acc: &mut Map, source: &Value, policy: MergePolicy) {
    if source.is_leaf() {
        trace!(kind = source.kind(), "merge operand has no keys");
        return;
    }

    for (key, incoming) in source.own_entries() {
        let merged = match (acc.get(&*key), incoming) {
            (Some(Value::List(prev)), Value::List(next)) => {
                Value::List(policy.merge_lists(prev, next))
            }
            (Some(prev @ Value::Map(_)), Value::Map(_)) => {
                Value::Map(merge_all(policy, [prev, incoming]))
            }
            _ => incoming.clone(),
        };
        acc.insert(key.into_owned(), merged);
    }
}
