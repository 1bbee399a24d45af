use crate::character_sets::is_pattern_whitespace;

/// Check if a hostname is a bracketed IPv6 literal (`[...]`).
/// No validation of the address itself happens here.
pub fn is_ipv6_hostname(hostname: &str) -> bool {
    hostname.len() >= 2 && hostname.starts_with('[') && hostname.ends_with(']')
}

/// Length of a leading scheme including its `:`.
/// Equivalent to `^[a-z0-9.+-]+:` (case-insensitive).
pub fn scheme_len(input: &str) -> Option<usize> {
    let name_len = input
        .bytes()
        .take_while(|&b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'+' | b'-'))
        .count();
    (name_len > 0 && input.as_bytes().get(name_len) == Some(&b':')).then_some(name_len + 1)
}

/// Split a trailing `:digits` port off a host.
/// Returns (hostname, port); a bare trailing `:` is removed without a port.
pub fn split_port(host: &str) -> (&str, Option<&str>) {
    let digits_start = host
        .bytes()
        .rposition(|b| !b.is_ascii_digit())
        .map_or(0, |pos| pos + 1);

    if digits_start == 0 || host.as_bytes()[digits_start - 1] != b':' {
        return (host, None);
    }

    let port = &host[digits_start..];
    let hostname = &host[..digits_start - 1];
    (hostname, (!port.is_empty()).then_some(port))
}

/// Match a bare path with optional query and no scheme or host.
/// Returns (pathname, search) on success.
///
/// Equivalent to `^(\/\/?(?!\/)[^?\s]*)(\?[^\s]*)?$`.
pub fn match_simple_path(input: &str) -> Option<(&str, Option<&str>)> {
    let bytes = input.as_bytes();
    if bytes.first() != Some(&b'/') {
        return None;
    }
    if bytes.get(1) == Some(&b'/') && bytes.get(2) == Some(&b'/') {
        return None;
    }
    if input.chars().any(is_pattern_whitespace) {
        return None;
    }

    Some(memchr::memchr(b'?', bytes).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos..]))
    }))
}

/// Check for `//user@host` at the start of a scheme-less remainder.
/// Equivalent to `^\/\/[^@\/]+@[^@\/]+`.
pub fn looks_like_auth_host(rest: &str) -> bool {
    let Some(after) = rest.strip_prefix("//") else {
        return false;
    };
    let user_len = after.bytes().take_while(|&b| b != b'@' && b != b'/').count();
    if user_len == 0 || after.as_bytes().get(user_len) != Some(&b'@') {
        return false;
    }
    after
        .as_bytes()
        .get(user_len + 1)
        .is_some_and(|&b| b != b'@' && b != b'/')
}
