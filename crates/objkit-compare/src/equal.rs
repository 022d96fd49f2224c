//! Deep equality over flattened leaf sequences.
//!
//! Two values are deep-equal when their flattened leaves have the same
//! length and are strictly equal position by position. Key names take no
//! part in the comparison: `{a: {x: 1}}` and `{b: {x: 1}}` are equal.

use tracing::{trace, warn};

use objkit_types::Value;

use crate::flatten::flatten;

/// Strict equality between two leaves.
///
/// Same variant and same payload, without coercion: `1` and `"1"` differ,
/// `null` and `undefined` differ. Numbers compare with IEEE semantics, so
/// `NaN` never equals itself and `0.0 == -0.0`. Containers are compared
/// structurally, though flattened sequences never contain them.
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::List(_), Value::List(_)) | (Value::Map(_), Value::Map(_)) => a == b,
        _ => false,
    }
}

/// Returns `true` if both leaf sequences have the same length and are
/// strictly equal at every index.
pub fn leaves_identical(a: &[&Value], b: &[&Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| strict_equals(x, y))
}

/// Returns `true` if every value flattens to the same leaf sequence as the
/// first one.
///
/// One value is trivially equal to itself. Zero values are a caller error;
/// the result is then vacuously `true`.
///
/// # Examples
///
/// ```rust
/// use objkit_compare::deep_equal;
/// use objkit_types::Value;
/// use serde_json::json;
///
/// let a = Value::from(json!({"a": 1, "b": 2}));
/// let b = Value::from(json!({"x": 1, "y": 2}));
/// let c = Value::from(json!({"a": 2, "b": 1}));
/// assert!(deep_equal(&[a.clone(), b]));
/// assert!(!deep_equal(&[a, c]));
/// ```
pub fn deep_equal(values: &[Value]) -> bool {
    let Some((base, rest)) = values.split_first() else {
        warn!("deep_equal called without operands");
        return true;
    };

    let base_leaves = flatten(base);
    rest.iter().enumerate().all(|(index, value)| {
        let equal = leaves_identical(&base_leaves, &flatten(value));
        if !equal {
            trace!(operand = index + 1, "operand differs from base");
        }
        equal
    })
}
