//! Deep copies through a JSON round trip.
//!
//! The copy is as lossy as JSON itself: `Undefined` map entries disappear,
//! `Undefined` list items and non-finite numbers come back as `null`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;

use objkit_types::Value;

use crate::error::ObjkitResult;

/// Deep-copy a structured value by serializing it to JSON and parsing it
/// back.
///
/// ```rust
/// use objkit::{clone_value, Map, Value};
///
/// let mut map = Map::new();
/// map.insert("kept".into(), Value::from(1));
/// map.insert("dropped".into(), Value::Undefined);
///
/// let copy = clone_value(&Value::Map(map)).unwrap();
/// assert_eq!(copy.to_string(), r#"{"kept":1}"#);
/// assert_eq!(copy.get("dropped"), None);
/// ```
pub fn clone_value(value: &Value) -> ObjkitResult<Value> {
    let text = value.to_json_string()?;
    trace!(bytes = text.len(), "clone round trip");
    Ok(Value::from_json_str(&text)?)
}

/// Deep-copy any serde type through a JSON round trip.
///
/// Fails when the value has no JSON form (e.g. a map with non-string keys)
/// or when the JSON form does not deserialize back into `T` (e.g. a `NaN`
/// float, which is written as `null`).
pub fn clone_via_json<T>(value: &T) -> ObjkitResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let text = serde_json::to_string(value)?;
    Ok(serde_json::from_str(&text)?)
}
