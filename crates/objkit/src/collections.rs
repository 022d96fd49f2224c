//! Set difference over slices and entry mapping over ordered maps.

use std::collections::HashSet;
use std::hash::Hash;

use indexmap::IndexMap;

use objkit_types::{Map, Value};

/// Elements of `left` that do not occur in `right`.
///
/// Order and duplicates of `left` are preserved. Membership uses a hash
/// set built from `right`, so the cost is O(n + m).
///
/// ```rust
/// use objkit::left_outer_join;
///
/// assert_eq!(left_outer_join(&[1, 2, 3], &[2, 3]), vec![1]);
/// ```
pub fn left_outer_join<T>(left: &[T], right: &[T]) -> Vec<T>
where
    T: Hash + Eq + Clone,
{
    let seen: HashSet<&T> = right.iter().collect();
    left.iter()
        .filter(|item| !seen.contains(item))
        .cloned()
        .collect()
}

/// Like [`left_outer_join`], comparing the keys produced by `key` instead of
/// the elements themselves.
pub fn left_outer_join_by<T, K, F>(left: &[T], right: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let seen: HashSet<K> = right.iter().map(&key).collect();
    left.iter()
        .filter(|item| !seen.contains(&key(*item)))
        .cloned()
        .collect()
}

/// Left outer join of structured values on the map field `field`.
///
/// Field values are compared as property keys, so `1` and `"1"` match. An
/// element that is not a map, or lacks the field, is keyed as `undefined`.
pub fn left_outer_join_on(left: &[Value], right: &[Value], field: &str) -> Vec<Value> {
    left_outer_join_by(left, right, |item| {
        item.get(field)
            .unwrap_or(&Value::Undefined)
            .to_property_key()
    })
}

/// Map every value of `map` through `f(value, key, index)`, keeping keys and
/// their order.
pub fn map_entries<F>(map: &Map, f: F) -> Map
where
    F: FnMut(&Value, &str, usize) -> Value,
{
    map_entries_generic(map, f)
}

/// [`map_entries`] for any insertion-ordered map.
pub fn map_entries_generic<K, V, U, F>(map: &IndexMap<K, V>, mut f: F) -> IndexMap<K, U>
where
    K: Hash + Eq + Clone + AsRef<str>,
    F: FnMut(&V, &str, usize) -> U,
{
    map.iter()
        .enumerate()
        .map(|(index, (key, value))| (key.clone(), f(value, key.as_ref(), index)))
        .collect()
}
