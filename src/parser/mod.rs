mod authority;

pub use authority::HOSTNAME_MAX_LEN;

use crate::checkers::{looks_like_auth_host, match_simple_path, scheme_len};
use crate::compat::{Cow, String, ToString};
use crate::helpers::{Scanned, auto_escape, scan_input};
use crate::parsed_url::{ParsedUrl, Query};
use crate::query_string::QueryParams;
use crate::scheme::get_scheme_kind;
use crate::types::SchemeKind;

fn make_query(raw: &str, parse_query_string: bool) -> Query {
    if parse_query_string {
        Query::Parsed(QueryParams::parse(raw))
    } else {
        Query::Raw(raw.to_string())
    }
}

/// Parse a URL with the legacy tolerant rules.
///
/// Never fails: malformed input leaves components absent or partially
/// filled. With `slashes_denote_host`, a leading `//` starts a host even
/// without a scheme.
pub fn parse_url(input: &str, parse_query_string: bool, slashes_denote_host: bool) -> ParsedUrl {
    let mut url = ParsedUrl::new();
    let Scanned { rest, has_hash } = scan_input(input);

    if !slashes_denote_host && !has_hash {
        if let Some((pathname, search)) = match_simple_path(&rest) {
            url.pathname = Some(pathname.to_string());
            url.path = Some(rest.to_string());
            match search {
                Some(search) => {
                    url.search = Some(search.to_string());
                    url.query = Some(make_query(&search[1..], parse_query_string));
                }
                None if parse_query_string => {
                    url.query = Some(Query::Parsed(QueryParams::new()));
                }
                None => {}
            }
            return url;
        }
    }

    let mut rest: &str = &rest;
    // Only the hostless check sees the lower-cased scheme; `HTTP:foo`
    // still takes a host because the slashed set matches as written
    let mut written_kind = SchemeKind::Other;
    if let Some(len) = scheme_len(rest) {
        written_kind = get_scheme_kind(&rest[..len]);
        url.protocol = Some(rest[..len].to_ascii_lowercase());
        rest = &rest[len..];
    }
    let has_protocol = url.protocol.is_some();
    let kind = url
        .protocol
        .as_deref()
        .map_or(SchemeKind::Other, get_scheme_kind);

    // `user@server` is always a host, and `//foo/bar` resolves as host `foo`
    let mut slashes = false;
    if slashes_denote_host || has_protocol || looks_like_auth_host(rest) {
        slashes = rest.starts_with("//");
        if slashes && !kind.is_hostless() {
            rest = &rest[2..];
            url.slashes = Some(true);
        }
    }

    let has_host = slashes || (has_protocol && !written_kind.is_slashed());
    let rest = if !kind.is_hostless() && has_host {
        authority::parse_authority(&mut url, rest)
    } else {
        rest.to_string()
    };

    let escaped = if kind.is_unsafe() {
        None
    } else {
        match auto_escape(&rest) {
            Cow::Owned(escaped) => Some(escaped),
            Cow::Borrowed(_) => None,
        }
    };
    let rest = escaped.unwrap_or(rest);

    split_path_query_hash(&mut url, &rest, parse_query_string);

    if kind.is_slashed()
        && url.hostname.as_deref().is_some_and(|h| !h.is_empty())
        && url.pathname.is_none()
    {
        url.pathname = Some(String::from("/"));
    }
    url.sync_path();

    url
}

/// Fill `hash`, `search`, `query` and `pathname` from the post-host remainder
fn split_path_query_hash(url: &mut ParsedUrl, rest: &str, parse_query_string: bool) {
    let bytes = rest.as_bytes();
    let hash_idx = memchr::memchr(b'#', bytes);
    let search_end = hash_idx.unwrap_or(bytes.len());
    let question_idx = memchr::memchr(b'?', &bytes[..search_end]);

    if let Some(hash) = hash_idx {
        url.hash = Some(rest[hash..].to_string());
    }

    match question_idx {
        Some(question) => {
            url.search = Some(rest[question..search_end].to_string());
            url.query = Some(make_query(
                &rest[question + 1..search_end],
                parse_query_string,
            ));
        }
        None if parse_query_string => {
            url.query = Some(Query::Parsed(QueryParams::new()));
        }
        None => {}
    }

    match question_idx.or(hash_idx) {
        None if !rest.is_empty() => url.pathname = Some(rest.to_string()),
        Some(first) if first > 0 => url.pathname = Some(rest[..first].to_string()),
        _ => {}
    }
}
