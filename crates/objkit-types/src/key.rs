//! Property-key projection: the string a value turns into when it is used
//! as an object key.

use crate::value::Value;

impl Value {
    /// String form of this value when used as a property key.
    ///
    /// Two values collide as keys iff their property keys are equal, so
    /// `1` and `"1"` collide while `1` and `true` do not.
    ///
    /// ```
    /// use objkit_types::Value;
    ///
    /// assert_eq!(Value::from(1).to_property_key(), "1");
    /// assert_eq!(Value::from(0.5).to_property_key(), "0.5");
    /// assert_eq!(Value::Undefined.to_property_key(), "undefined");
    /// ```
    pub fn to_property_key(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_key(*n),
            Value::String(s) => s.clone(),
            Value::List(items) => items
                .iter()
                .map(|item| match item {
                    Value::Undefined | Value::Null => String::new(),
                    other => other.to_property_key(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Map(_) => "[object Object]".to_string(),
        }
    }
}

fn number_key(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        // Exponent form always carries a sign: 1e+21, 1e-7.
        let text = format!("{n:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        }
    } else {
        format!("{n}")
    }
}
