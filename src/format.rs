use crate::checkers::is_ipv6_hostname;
use crate::compat::{Cow, String, format};
use crate::parsed_url::{Query, UrlInput};
use crate::scheme::is_slashed;
use crate::unicode::percent_encode::percent_encode_userinfo_into;
use crate::ParsedUrl;

/// Which optional components to include when formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Include user-info
    pub auth: bool,
    /// Include the hash
    pub fragment: bool,
    /// Include the search/query
    pub search: bool,
    /// Reserved; has no effect
    pub unicode: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            auth: true,
            fragment: true,
            search: true,
            unicode: false,
        }
    }
}

/// Format a record or a URL string.
/// Strings are parsed first (no query decoding, slashes do not denote a
/// host), which normalizes a loosely written URL.
pub fn format<'a>(url: impl Into<UrlInput<'a>>, options: &FormatOptions) -> String {
    match url.into() {
        UrlInput::Parsed(url) => format_url(url, options),
        input => format_url(&input.into_parsed_with(false, false), options),
    }
}

/// Replace every byte in `targets` with its escape, leaving the rest as-is
fn escape_bytes<'a>(input: &'a str, targets: &[(u8, &str)]) -> Cow<'a, str> {
    if !input.bytes().any(|b| targets.iter().any(|&(t, _)| t == b)) {
        return Cow::Borrowed(input);
    }
    let mut escaped = String::with_capacity(input.len() + 4);
    for c in input.chars() {
        match targets.iter().find(|&&(t, _)| char::from(t) == c) {
            Some(&(_, sub)) => escaped.push_str(sub),
            None => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn non_empty(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.is_empty())
}

/// Reassemble a URL string from its components
pub fn format_url(url: &ParsedUrl, options: &FormatOptions) -> String {
    let mut auth = String::new();
    if options.auth {
        if let Some(raw) = non_empty(url.auth.as_ref()) {
            percent_encode_userinfo_into(&mut auth, raw);
            auth.push('@');
        }
    }

    let mut host = String::new();
    if let Some(h) = non_empty(url.host.as_ref()) {
        host.push_str(&auth);
        host.push_str(h);
    } else if let Some(hostname) = non_empty(url.hostname.as_ref()) {
        host.push_str(&auth);
        if hostname.contains(':') && !is_ipv6_hostname(hostname) {
            host.push('[');
            host.push_str(hostname);
            host.push(']');
        } else {
            host.push_str(hostname);
        }
        if let Some(port) = non_empty(url.port.as_ref()) {
            host.push(':');
            host.push_str(port);
        }
    }

    let mut protocol = String::from(url.protocol.as_deref().unwrap_or(""));
    if !protocol.is_empty() && !protocol.ends_with(':') {
        protocol.push(':');
    }

    let mut pathname = escape_bytes(
        url.pathname.as_deref().unwrap_or(""),
        &[(b'#', "%23"), (b'?', "%3F")],
    );

    let slashes = url.slashes == Some(true);
    let mut authority = String::new();
    if slashes || is_slashed(Some(&protocol)) {
        if slashes || !host.is_empty() {
            if !pathname.is_empty() && !pathname.starts_with('/') {
                pathname = Cow::Owned(format!("/{pathname}"));
            }
            authority.push_str("//");
            authority.push_str(&host);
        } else if protocol.starts_with("file") {
            authority.push_str("//");
        }
    } else {
        authority = host;
    }

    let mut search = String::new();
    if options.search {
        match non_empty(url.search.as_ref()) {
            Some(s) => search.push_str(s),
            None => {
                if let Some(Query::Parsed(params)) = &url.query {
                    let query = params.stringify();
                    if !query.is_empty() {
                        search.push('?');
                        search.push_str(&query);
                    }
                }
            }
        }
    }
    let mut search = escape_bytes(&search, &[(b'#', "%23")]).into_owned();
    if !search.is_empty() && !search.starts_with('?') {
        search.insert(0, '?');
    }

    let mut hash = String::new();
    if options.fragment {
        if let Some(h) = non_empty(url.hash.as_ref()) {
            if !h.starts_with('#') {
                hash.push('#');
            }
            hash.push_str(h);
        }
    }

    let mut out = protocol;
    out.reserve(authority.len() + pathname.len() + search.len() + hash.len());
    out.push_str(&authority);
    out.push_str(&pathname);
    out.push_str(&search);
    out.push_str(&hash);
    out
}
