use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;

/// Keyed container with first-insertion iteration order.
///
/// Re-inserting an existing key replaces its value in place; the key keeps
/// its original position.
pub type Map = IndexMap<String, Value>;

/// A structured value: a leaf or a container of further values.
///
/// Modelled on a JSON document with two additions a JSON tree cannot carry:
/// `Undefined` (distinct from both `Null` and an absent key) and non-finite
/// numbers.
///
/// # Classification
///
/// A value is a *container* iff it is a [`Value::List`] or a [`Value::Map`].
/// Everything else, `Null` and `Undefined` included, is a *leaf* and
/// terminates traversal.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
}

impl Value {
    /// Returns `true` for lists and maps.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Returns `true` for anything that is not a list or a map.
    pub fn is_leaf(&self) -> bool {
        !self.is_container()
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Look up a map entry. Lists and leaves have no named entries.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Short type name, used in logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "array",
            Value::Map(_) => "object",
        }
    }

    /// Own entries in traversal order.
    ///
    /// Maps yield their keys in insertion order, lists yield their indices
    /// as decimal strings, leaves yield nothing.
    pub fn own_entries(&self) -> OwnEntries<'_> {
        match self {
            Value::List(items) => OwnEntries::List(items.iter().enumerate()),
            Value::Map(map) => OwnEntries::Map(map.iter()),
            _ => OwnEntries::Empty,
        }
    }

    /// Own values in traversal order; the values of [`Value::own_entries`].
    pub fn own_values(&self) -> OwnValues<'_> {
        match self {
            Value::List(items) => OwnValues::List(items.iter()),
            Value::Map(map) => OwnValues::Map(map.values()),
            _ => OwnValues::Empty,
        }
    }

    /// Number of own entries (0 for leaves).
    pub fn len(&self) -> usize {
        match self {
            Value::List(items) => items.len(),
            Value::Map(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Iterator over `(key, value)` pairs of a value. See [`Value::own_entries`].
pub enum OwnEntries<'a> {
    Empty,
    List(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Map(indexmap::map::Iter<'a, String, Value>),
}

impl<'a> Iterator for OwnEntries<'a> {
    type Item = (Cow<'a, str>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            OwnEntries::Empty => None,
            OwnEntries::List(iter) => iter
                .next()
                .map(|(index, value)| (Cow::Owned(index.to_string()), value)),
            OwnEntries::Map(iter) => iter
                .next()
                .map(|(key, value)| (Cow::Borrowed(key.as_str()), value)),
        }
    }
}

/// Iterator over the values of a value. See [`Value::own_values`].
pub enum OwnValues<'a> {
    Empty,
    List(std::slice::Iter<'a, Value>),
    Map(indexmap::map::Values<'a, String, Value>),
}

impl<'a> Iterator for OwnValues<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            OwnValues::Empty => None,
            OwnValues::List(iter) => iter.next(),
            OwnValues::Map(iter) => iter.next(),
        }
    }
}

impl fmt::Display for Value {
    /// Compact JSON text (JSON.stringify rules, see the `serde` impls).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(text) => f.write_str(&text),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
