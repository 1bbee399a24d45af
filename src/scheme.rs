use crate::types::SchemeKind;

/// Classify a protocol, with or without its trailing `:`.
/// Expects the lower-cased form; matching is case-sensitive.
/// Uses perfect hash based on length + first byte to minimize comparisons.
pub fn get_scheme_kind(protocol: &str) -> SchemeKind {
    let scheme = protocol.strip_suffix(':').unwrap_or(protocol);
    let bytes = scheme.as_bytes();

    match (bytes.len(), bytes.first()) {
        (2, Some(b'w')) if bytes == b"ws" => SchemeKind::Slashed,
        (3, Some(b'w')) if bytes == b"wss" => SchemeKind::Slashed,
        (3, Some(b'f')) if bytes == b"ftp" => SchemeKind::Slashed,
        (4, Some(b'h')) if bytes == b"http" => SchemeKind::Slashed,
        (4, Some(b'f')) if bytes == b"file" => SchemeKind::Slashed,
        (5, Some(b'h')) if bytes == b"https" => SchemeKind::Slashed,
        (6, Some(b'g')) if bytes == b"gopher" => SchemeKind::Slashed,
        (10, Some(b'j')) if bytes == b"javascript" => SchemeKind::Hostless,
        _ => SchemeKind::Other,
    }
}

/// Check for the file scheme (`file` or `file:`)
pub fn is_file_scheme(protocol: &str) -> bool {
    protocol == "file" || protocol == "file:"
}

/// Shorthand for `get_scheme_kind(..).is_slashed()` on an optional protocol
pub fn is_slashed(protocol: Option<&str>) -> bool {
    protocol.is_some_and(|p| get_scheme_kind(p).is_slashed())
}

/// Shorthand for `get_scheme_kind(..).is_hostless()` on an optional protocol
pub fn is_hostless(protocol: Option<&str>) -> bool {
    protocol.is_some_and(|p| get_scheme_kind(p).is_hostless())
}
