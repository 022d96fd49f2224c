//! Query-string building.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters `encodeURI` escapes: everything except alphanumerics and
/// `; , / ? : @ & = + $ - _ . ! ~ * ' ( ) #`.
const URI_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Build a `?`-prefixed query string from key/value pairs.
///
/// Pairs with an empty value are dropped. Values are URI-encoded, keys are
/// written as given. Pair order is kept.
///
/// ```rust
/// use objkit::normalize_query;
///
/// assert_eq!(normalize_query([("a", "1"), ("b", "")]), "?a=1");
/// assert_eq!(normalize_query([("q", "two words")]), "?q=two%20words");
/// ```
pub fn normalize_query<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let joined = pairs
        .into_iter()
        .filter(|(_, value)| !value.as_ref().is_empty())
        .map(|(key, value)| {
            format!(
                "{}={}",
                key.as_ref(),
                utf8_percent_encode(value.as_ref(), URI_ESCAPE)
            )
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("?{joined}")
}
