use crate::character_sets::{HOST_AT, HOST_END, HOST_INVALID, classify_host_byte, is_hostname_char};
use crate::checkers::is_ipv6_hostname;
use crate::compat::{String, ToString, format};
use crate::parsed_url::ParsedUrl;
use crate::unicode::idna::to_ascii_lenient;
use crate::unicode::percent_encode::percent_decode_lenient;

/// Hostnames longer than this many UTF-16 code units are discarded
pub const HOSTNAME_MAX_LEN: usize = 255;

/// Positions found while scanning the authority section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct AuthorityBounds {
    /// Last `@` before any host-ending character
    at_sign: Option<usize>,
    /// First character that cannot belong to the host, after `at_sign`
    non_host: Option<usize>,
}

/// Walk the authority until the first `#`, `/` or `?`.
///
/// `http://a@b@c/` gives auth `a@b` and host `c`; `http://a@b?@c` gives
/// auth `a`, host `b` and path `/?@c`.
fn scan_authority(rest: &str) -> AuthorityBounds {
    let mut bounds = AuthorityBounds::default();
    for (i, &b) in rest.as_bytes().iter().enumerate() {
        match classify_host_byte(b) {
            HOST_INVALID => {
                bounds.non_host.get_or_insert(i);
            }
            HOST_END => {
                bounds.non_host.get_or_insert(i);
                break;
            }
            HOST_AT => {
                bounds.at_sign = Some(i);
                bounds.non_host = None;
            }
            _ => {}
        }
    }
    bounds
}

/// Extract auth and host from `rest` into `url` and normalize the hostname.
/// Returns whatever follows the host, including characters pushed back out
/// of an invalid hostname.
pub fn parse_authority(url: &mut ParsedUrl, rest: &str) -> String {
    let bounds = scan_authority(rest);

    let mut start = 0;
    if let Some(at) = bounds.at_sign {
        url.auth = Some(percent_decode_lenient(&rest[..at]).into_owned());
        start = at + 1;
    }

    let (host, remainder) = match bounds.non_host {
        Some(end) => (&rest[start..end], &rest[end..]),
        None => (&rest[start..], ""),
    };
    url.host = Some(host.to_string());
    url.parse_host();

    let hostname = url.hostname.take().unwrap_or_default();
    let ipv6 = is_ipv6_hostname(&hostname);
    let (hostname, mut remainder) = if ipv6 {
        (hostname, remainder.to_string())
    } else {
        truncate_invalid_hostname(hostname, remainder)
    };

    let mut hostname = if hostname.encode_utf16().count() > HOSTNAME_MAX_LEN {
        String::new()
    } else {
        hostname.to_lowercase()
    };
    if !hostname.is_empty() && !ipv6 {
        hostname = to_ascii_lenient(&hostname);
    }

    let mut host = hostname.clone();
    if let Some(port) = url.port.as_deref().filter(|p| !p.is_empty()) {
        host.push(':');
        host.push_str(port);
    }
    url.host = Some(host);

    if ipv6 {
        // The host keeps its brackets, the hostname does not
        if is_ipv6_hostname(&hostname) {
            hostname = hostname[1..hostname.len() - 1].to_string();
        }
        if !remainder.starts_with('/') {
            remainder.insert(0, '/');
        }
    }
    url.hostname = Some(hostname);

    remainder
}

/// Cut the hostname at its first disallowed character; that character and
/// everything after it start the path instead.
fn truncate_invalid_hostname(mut hostname: String, remainder: &str) -> (String, String) {
    match hostname.char_indices().find(|&(_, c)| !is_hostname_char(c)) {
        Some((idx, _)) => {
            let pushed_back = format!("/{}{remainder}", &hostname[idx..]);
            hostname.truncate(idx);
            (hostname, pushed_back)
        }
        None => (hostname, remainder.to_string()),
    }
}
