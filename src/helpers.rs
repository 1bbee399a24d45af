use crate::character_sets::is_trim_whitespace;
use crate::compat::{Cow, String};

/// Result of the initial forward scan over a raw URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanned<'a> {
    /// Trimmed input with backslashes before the first `?`/`#` turned into `/`
    pub rest: Cow<'a, str>,
    /// Whether a `#` appears anywhere in the input
    pub has_hash: bool,
}

/// Trim surrounding whitespace, convert backslashes in the part before the
/// first `?` or `#`, and note whether a fragment is present.
/// Returns a Cow to avoid allocation when no backslash needs converting.
pub fn scan_input(input: &str) -> Scanned<'_> {
    let trimmed = input.trim_matches(is_trim_whitespace);
    let bytes = trimmed.as_bytes();

    let split = memchr::memchr2(b'?', b'#', bytes).unwrap_or(bytes.len());
    let has_hash = memchr::memchr(b'#', &bytes[split..]).is_some();

    let rest = if memchr::memchr(b'\\', &bytes[..split]).is_some() {
        let mut converted = String::with_capacity(trimmed.len());
        converted.push_str(&trimmed[..split].replace('\\', "/"));
        converted.push_str(&trimmed[split..]);
        Cow::Owned(converted)
    } else {
        Cow::Borrowed(trimmed)
    };

    Scanned { rest, has_hash }
}

/// Escape delimiters and unwise characters after the host.
/// Returns the input unchanged when nothing needs escaping.
pub fn auto_escape(rest: &str) -> Cow<'_, str> {
    use crate::character_sets::auto_escape_byte;

    let bytes = rest.as_bytes();
    let Some(first) = bytes.iter().position(|&b| auto_escape_byte(b).is_some()) else {
        return Cow::Borrowed(rest);
    };

    let mut escaped = String::with_capacity(rest.len() + 8);
    let mut last = 0;
    for (i, &b) in bytes.iter().enumerate().skip(first) {
        if let Some(sub) = auto_escape_byte(b) {
            escaped.push_str(&rest[last..i]);
            escaped.push_str(sub);
            last = i + 1;
        }
    }
    escaped.push_str(&rest[last..]);
    Cow::Owned(escaped)
}
