use crate::compat::{Cow, String, ToString};
use crate::types::Platform;
use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, utf8_percent_encode};

/// Userinfo encode set used when formatting `auth`.
/// Everything except A-Z a-z 0-9 and `! - . _ ~ ' ( ) * :`
pub const USERINFO_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b':');

/// Query-string component encode set.
/// Everything except A-Z a-z 0-9 and `- . _ ~ ! ' ( ) *`
pub const QUERY_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*');

/// Path percent-encode set applied to file URL pathnames.
/// C0 control + space, ", #, <, >, ?, \`, {, }
pub const FILE_PATH_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode a string using the provided encode set
pub fn percent_encode_with_set(input: &str, encode_set: &'static AsciiSet) -> String {
    utf8_percent_encode(input, encode_set).to_string()
}

/// Write percent-encoded string directly to buffer
pub fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());
    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode userinfo directly into buffer
pub fn percent_encode_userinfo_into(buffer: &mut String, input: &str) {
    percent_encode_into(buffer, input, USERINFO_SET);
}

/// Percent-encode one query-string key or value
pub fn percent_encode_query_component(input: &str) -> String {
    percent_encode_with_set(input, QUERY_COMPONENT_SET)
}

/// Decode percent-encoding, keeping the input as-is if the result is not UTF-8.
/// Malformed escapes such as `%zz` pass through untouched.
pub fn percent_decode_lenient(input: &str) -> Cow<'_, str> {
    percent_encoding::percent_decode_str(input)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(input))
}

/// Decode percent-encoding, returning `None` if the bytes are not UTF-8
pub fn percent_decode(input: &str) -> Option<String> {
    percent_encoding::percent_decode_str(input)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

/// Encode the characters a URL pathname setter would otherwise drop or
/// reinterpret: `%`, LF, CR, tab, and `\` where it is a legal path character.
pub fn encode_path_chars(path: &str, platform: Platform) -> Cow<'_, str> {
    let needs_encoding = |b: u8| {
        matches!(b, b'%' | b'\n' | b'\r' | b'\t') || (b == b'\\' && !platform.is_windows())
    };
    if !path.bytes().any(needs_encoding) {
        return Cow::Borrowed(path);
    }

    let mut encoded = String::with_capacity(path.len() + 8);
    for c in path.chars() {
        match c {
            '%' => encoded.push_str("%25"),
            '\\' if !platform.is_windows() => encoded.push_str("%5C"),
            '\n' => encoded.push_str("%0A"),
            '\r' => encoded.push_str("%0D"),
            '\t' => encoded.push_str("%09"),
            _ => encoded.push(c),
        }
    }
    Cow::Owned(encoded)
}
