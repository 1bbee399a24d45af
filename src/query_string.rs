use crate::compat::{String, ToString, Vec, vec};
use crate::unicode::percent_encode::percent_encode_query_component;

/// Maximum number of `&`-separated pairs read by [`QueryParams::parse`]
pub const MAX_KEYS: usize = 1000;

/// Decoded query string: an insertion-ordered mapping from key to values.
/// Repeated keys collect their values under the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse a query string (without the leading `?`).
    /// `+` decodes to a space and malformed escapes are kept literally.
    pub fn parse(query: &str) -> Self {
        let mut params = Self::new();
        if query.is_empty() {
            return params;
        }

        for pair in query.split('&').take(MAX_KEYS) {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            params.append(&decode_component(key), &decode_component(value));
        }
        params
    }

    /// Serialize back into `k=v&k=v` form, without a leading `?`
    pub fn stringify(&self) -> String {
        let mut result = String::new();
        for (key, values) in &self.entries {
            let key = percent_encode_query_component(key);
            for value in values {
                if !result.is_empty() {
                    result.push('&');
                }
                result.push_str(&key);
                result.push('=');
                result.push_str(&percent_encode_query_component(value));
            }
        }
        result
    }

    pub fn append(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => values.push(value.to_string()),
            None => self
                .entries
                .push((key.to_string(), vec![value.to_string()])),
        }
    }

    /// Replace every value of `key` with a single value
    pub fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, values)) => *values = vec![value.to_string()],
            None => self
                .entries
                .push((key.to_string(), vec![value.to_string()])),
        }
    }

    pub fn delete(&mut self, key: &str) {
        self.entries.retain(|(k, _)| k != key);
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, values)| values.first())
            .map(String::as_str)
    }

    /// Get all values for a key.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over every key/value pair, grouped by key
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(k, values)| {
            values.iter().map(move |v| (k.as_str(), v.as_str()))
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.stringify())
    }
}

impl From<&str> for QueryParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Decode a component from a query string.
fn decode_component(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut result = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => result.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        result.push((hi << 4) | lo);
                        i += 2;
                    }
                    _ => result.push(b'%'),
                }
            }
            b => result.push(b),
        }
        i += 1;
    }

    String::from_utf8_lossy(&result).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
