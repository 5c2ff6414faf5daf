use std::collections::BTreeMap;

/// A map of cookie names to cookie values.
pub type Cookies = BTreeMap<String, String>;

/// Parses the value of a `Cookie` header, e.g. `a=1; b=2`.
///
/// Pairs without a `=` or with an empty name are skipped. Surrounding double quotes are stripped
/// from values. A name seen more than once keeps its last value.
pub fn parse_header(header: &str) -> Cookies {
    header
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            Some((name.to_string(), value.to_string()))
        })
        .collect()
}
