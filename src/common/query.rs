use form_urlencoded::parse as uri_parse;
use serde_json::{Map, Value};

/// An ordered map of keys to dynamic values, used for request, query and file data.
pub type DataMap = Map<String, Value>;

/// Decodes `application/x-www-form-urlencoded` data into a map of string values.
///
/// A key seen more than once keeps the position of its first occurrence and the value of its last.
pub fn parse(input: &[u8]) -> DataMap {
    uri_parse(input)
        .into_owned()
        .fold(DataMap::new(), |mut map, (key, value)| {
            map.insert(key, Value::String(value));
            map
        })
}

/// Builds a data map from string pairs.
pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> DataMap
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), Value::String(v.into())))
        .collect()
}
