use crate::compat::{String, Vec, format};

/// Check if 4 bytes match "xn--" (case insensitive)
fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4
        && matches!(slice[0], b'x' | b'X')
        && matches!(slice[1], b'n' | b'N')
        && slice[2] == b'-'
        && slice[3] == b'-'
}

/// Check if domain contains Punycode (xn-- prefix, case insensitive)
pub fn has_punycode(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    if bytes.len() < 4 {
        return false;
    }

    if is_punycode_prefix(bytes) {
        return true;
    }

    memchr::memchr_iter(b'.', bytes).any(|pos| is_punycode_prefix(&bytes[pos + 1..]))
}

/// Convert a hostname to its ASCII-compatible form.
///
/// Never fails. ASCII input is returned as-is; non-ASCII input goes through
/// IDNA `ToASCII`, and if that rejects the domain, each non-ASCII label is
/// Punycode-encoded on its own.
pub fn to_ascii_lenient(domain: &str) -> String {
    if domain.is_ascii() {
        return String::from(domain);
    }

    if let Ok(ascii) = idna::domain_to_ascii(domain) {
        return ascii;
    }

    let labels: Vec<String> = domain
        .split('.')
        .map(|label| {
            if label.is_ascii() {
                return String::from(label);
            }
            idna::punycode::encode_str(label)
                .map_or_else(|| String::from(label), |encoded| format!("xn--{encoded}"))
        })
        .collect();
    labels.join(".")
}

/// Convert a domain to ASCII with the strict IDNA mapping.
/// Returns an empty string when the domain is invalid.
pub fn domain_to_ascii(domain: &str) -> String {
    if domain.is_ascii() && !has_punycode(domain) {
        return domain.to_ascii_lowercase();
    }
    idna::domain_to_ascii(domain).unwrap_or_default()
}

/// Convert a domain to Unicode, decoding `xn--` labels.
/// Returns an empty string when the domain is invalid.
pub fn domain_to_unicode(domain: &str) -> String {
    if !has_punycode(domain) && domain.is_ascii() {
        return domain.to_ascii_lowercase();
    }
    let (unicode, result) = idna::domain_to_unicode(domain);
    if result.is_ok() { unicode } else { String::new() }
}
