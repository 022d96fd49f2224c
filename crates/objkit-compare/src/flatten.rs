//! Leaf extraction.
//!
//! A value's own entries are visited depth-first in key order (insertion
//! order for maps, index order for lists). Containers are descended into,
//! leaves are collected. Key names are discarded.

use objkit_types::{OwnValues, Value};

/// Collect the leaves of `value` in depth-first, key order.
///
/// A top-level leaf has no own entries and flattens to an empty sequence.
/// Traversal uses an explicit stack, so nesting depth is bounded by memory
/// rather than by the call stack.
///
/// # Examples
///
/// ```rust
/// use objkit_compare::flatten;
/// use objkit_types::Value;
/// use serde_json::json;
///
/// let value = Value::from(json!({"a": 1, "b": {"c": [2, null]}, "d": "x"}));
/// let leaves: Vec<Value> = flatten(&value).into_iter().cloned().collect();
/// assert_eq!(leaves, [Value::from(1), Value::from(2), Value::Null, Value::from("x")]);
/// ```
pub fn flatten(value: &Value) -> Vec<&Value> {
    let mut leaves = Vec::new();
    let mut stack: Vec<OwnValues<'_>> = vec![value.own_values()];

    while let Some(frame) = stack.last_mut() {
        match frame.next() {
            Some(child) if child.is_container() => stack.push(child.own_values()),
            Some(child) => leaves.push(child),
            None => {
                stack.pop();
            }
        }
    }

    leaves
}
