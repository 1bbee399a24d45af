use crate::compat::{String, ToString, Vec, format};
use crate::parsed_url::{ParsedUrl, UrlInput};
use crate::scheme::{is_file_scheme, is_hostless, is_slashed};

/// Resolve `to` against `from` and serialize the result.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     legacy_url::resolve("http://example.com/a/b/", "../c"),
///     "http://example.com/a/c"
/// );
/// assert_eq!(legacy_url::resolve("/one/two/three", "four"), "/one/two/four");
/// ```
pub fn resolve(from: &str, to: &str) -> String {
    ParsedUrl::parse(from, false, true).resolve(to)
}

/// Resolve a relative reference against a source URL.
/// An empty source string yields the relative reference itself.
pub fn resolve_object<'a, 'b>(
    source: impl Into<UrlInput<'a>>,
    relative: impl Into<UrlInput<'b>>,
) -> ParsedUrl {
    let source = source.into();
    if source.is_empty_str() {
        return relative.into().into_parsed_with(false, true);
    }
    source
        .into_parsed_with(false, true)
        .resolve_object(relative)
}

fn truthy(field: Option<&String>) -> bool {
    field.is_some_and(|s| !s.is_empty())
}

fn either_slashes(first: Option<bool>, second: Option<bool>) -> Option<bool> {
    if first == Some(true) { first } else { second }
}

fn segments(pathname: Option<&String>) -> Vec<String> {
    match pathname {
        Some(p) if !p.is_empty() => p.split('/').map(ToString::to_string).collect(),
        _ => Vec::new(),
    }
}

fn is_absolute_segment(segment: Option<&String>) -> bool {
    segment.is_some_and(|s| s.is_empty() || s.starts_with('/'))
}

/// How the host takes part in merging two paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MergeMode {
    /// Always-slashed or scheme-less base: the host stays fixed
    Slashed,
    /// Any other scheme: the host is path segment zero, so `..` can climb
    /// into it (`mailto:a@b` + `c@d` => `mailto:c@d`)
    HostInPath,
}

impl MergeMode {
    fn for_protocol(protocol: Option<&str>) -> Self {
        match protocol {
            Some(p) if !p.is_empty() && !is_slashed(Some(p)) => Self::HostInPath,
            _ => Self::Slashed,
        }
    }
}

/// Merge `relative` into `base`.
///
/// Always produces a result. Branches, in order: empty reference,
/// host-relative (`//host/path`), scheme change, then path merge.
pub(crate) fn resolve_parsed(base: &ParsedUrl, relative: &ParsedUrl) -> ParsedUrl {
    let mut result = base.clone();

    // Hash is always overridden, even href="" removes it
    result.hash.clone_from(&relative.hash);

    if relative.href().is_empty() {
        return result;
    }

    if relative.slashes == Some(true) && !truthy(relative.protocol.as_ref()) {
        return resolve_host_relative(result, relative.clone());
    }

    if truthy(relative.protocol.as_ref()) && relative.protocol != result.protocol {
        return resolve_scheme_change(result, relative.clone());
    }

    merge_paths(result, relative.clone())
}

/// `//host/path`: take everything except the protocol from `relative`
fn resolve_host_relative(result: ParsedUrl, relative: ParsedUrl) -> ParsedUrl {
    let mut result = ParsedUrl {
        protocol: result.protocol,
        ..relative
    };

    // Match the parser, which gives `http://host` a pathname of `/`
    if is_slashed(result.protocol.as_deref())
        && truthy(result.hostname.as_ref())
        && !truthy(result.pathname.as_ref())
    {
        result.pathname = Some(String::from("/"));
        result.path = Some(String::from("/"));
    }
    result
}

/// A different scheme. Unknown schemes make `relative` absolute as-is;
/// always-slashed schemes other than `file` must end up with a host.
fn resolve_scheme_change(mut result: ParsedUrl, mut relative: ParsedUrl) -> ParsedUrl {
    let protocol = relative.protocol.clone().unwrap_or_default();
    if !is_slashed(Some(&protocol)) {
        return relative;
    }

    result.protocol = Some(protocol.clone());
    if !truthy(relative.host.as_ref()) && !is_file_scheme(&protocol) && !is_hostless(Some(&protocol))
    {
        let pathname = relative.pathname.take().unwrap_or_default();
        let mut rel_path: Vec<&str> = pathname.split('/').collect();

        // The first non-empty segment becomes the host
        let mut host = "";
        while !rel_path.is_empty() {
            host = rel_path.remove(0);
            if !host.is_empty() {
                break;
            }
        }
        relative.host = Some(host.to_string());
        if !truthy(relative.hostname.as_ref()) {
            relative.hostname = Some(String::new());
        }
        if rel_path.first() != Some(&"") {
            rel_path.insert(0, "");
        }
        if rel_path.len() < 2 {
            rel_path.insert(0, "");
        }
        result.pathname = Some(rel_path.join("/"));
    } else {
        result.pathname = relative.pathname.take();
    }

    result.search = relative.search;
    result.query = relative.query;
    result.host = Some(relative.host.clone().unwrap_or_default());
    result.auth = relative.auth;
    result.hostname = if truthy(relative.hostname.as_ref()) {
        relative.hostname
    } else {
        relative.host
    };
    result.port = relative.port;
    result.sync_path();
    result.slashes = either_slashes(result.slashes, relative.slashes);
    result
}

/// Move the hosts of `result` (and of a same-scheme `relative`) into
/// segment zero of their paths.
fn fold_host_into_path(
    result: &mut ParsedUrl,
    relative: &mut ParsedUrl,
    src_path: &mut Vec<String>,
    rel_path: &mut Vec<String>,
) {
    fn fold(host: Option<String>, path: &mut Vec<String>) {
        let Some(host) = host.filter(|h| !h.is_empty()) else {
            return;
        };
        match path.first_mut() {
            Some(first) if first.is_empty() => *first = host,
            _ => path.insert(0, host),
        }
    }

    result.hostname = Some(String::new());
    result.port = None;
    fold(result.host.take(), src_path);
    result.host = Some(String::new());

    if truthy(relative.protocol.as_ref()) {
        relative.hostname = None;
        relative.port = None;
        fold(relative.host.take(), rel_path);
    }
}

/// Take the host back out of segment zero, unless the path is absolute
fn unfold_host(result: &mut ParsedUrl, src_path: &mut Vec<String>, is_absolute: bool) {
    let host = if is_absolute || src_path.is_empty() {
        String::new()
    } else {
        src_path.remove(0)
    };
    result.hostname = Some(host.clone());
    result.host = Some(host);
    split_auth_from_host(result);
}

/// Auth can end up inside a recovered host, as in resolving `local2@domain2`
/// against `mailto:local1@domain1`. Only the text before the first `@` is
/// auth and only the text up to the second `@` stays as host.
fn split_auth_from_host(result: &mut ParsedUrl) {
    let Some(host) = result.host.as_deref() else {
        return;
    };
    if !memchr::memchr(b'@', host.as_bytes()).is_some_and(|at| at > 0) {
        return;
    }
    let mut parts = host.split('@');
    let auth = parts.next().map(ToString::to_string);
    let host = parts.next().map(ToString::to_string);
    result.auth = auth;
    result.hostname.clone_from(&host);
    result.host = host;
}

/// Drop `.` segments and cancel each `..` against the nearest segment
/// before it. Returns the number of `..` left over above the first segment.
fn collapse_dot_segments(segments: &mut Vec<String>) -> usize {
    let mut up = 0;
    let mut kept = Vec::with_capacity(segments.len());
    for segment in segments.drain(..).rev() {
        if segment == "." {
            continue;
        }
        if segment == ".." {
            up += 1;
        } else if up > 0 {
            up -= 1;
        } else {
            kept.push(segment);
        }
    }
    kept.reverse();
    *segments = kept;
    up
}

/// Same scheme (or none): merge the paths RFC 1808 style
fn merge_paths(mut result: ParsedUrl, mut relative: ParsedUrl) -> ParsedUrl {
    let is_source_abs = result.pathname.as_deref().is_some_and(|p| p.starts_with('/'));
    let is_rel_abs = truthy(relative.host.as_ref())
        || relative.pathname.as_deref().is_some_and(|p| p.starts_with('/'));
    let mut must_end_abs = is_rel_abs
        || is_source_abs
        || (truthy(result.host.as_ref()) && truthy(relative.pathname.as_ref()));
    let remove_all_dots = must_end_abs;
    let mut src_path = segments(result.pathname.as_ref());
    let mut rel_path = segments(relative.pathname.as_ref());
    let mode = MergeMode::for_protocol(result.protocol.as_deref());

    if mode == MergeMode::HostInPath {
        fold_host_into_path(&mut result, &mut relative, &mut src_path, &mut rel_path);
        must_end_abs = must_end_abs
            && (rel_path.first().is_some_and(String::is_empty)
                || src_path.first().is_some_and(String::is_empty));
    }

    if is_rel_abs {
        if relative.host.is_some() {
            if result.host != relative.host {
                result.auth = None;
            }
            result.host.clone_from(&relative.host);
            result.port.clone_from(&relative.port);
        }
        if relative.hostname.is_some() {
            if result.hostname != relative.hostname {
                result.auth = None;
            }
            result.hostname.clone_from(&relative.hostname);
        }
        result.search.clone_from(&relative.search);
        result.query.clone_from(&relative.query);
        src_path = rel_path;
    } else if !rel_path.is_empty() {
        // Replace the last segment of the base with the relative path
        src_path.pop();
        src_path.extend(rel_path);
        result.search.clone_from(&relative.search);
        result.query.clone_from(&relative.query);
    } else if relative.search.is_some() {
        // Only the search changes, like href="?foo"
        if mode == MergeMode::HostInPath {
            let host = (!src_path.is_empty()).then(|| src_path.remove(0));
            result.hostname.clone_from(&host);
            result.host = host;
            split_auth_from_host(&mut result);
        }
        result.search.clone_from(&relative.search);
        result.query.clone_from(&relative.query);
        if result.pathname.is_some() || result.search.is_some() {
            result.path = Some(result.joined_path());
        }
        return result;
    }

    if src_path.is_empty() {
        result.pathname = None;
        result.path = result
            .search
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|search| format!("/{search}"));
        return result;
    }

    // A path ending in `.` or `..` keeps a trailing slash, other names do not
    let has_trailing_slash = src_path.last().is_some_and(|last| {
        ((truthy(result.host.as_ref()) || truthy(relative.host.as_ref()) || src_path.len() > 1)
            && (last == "." || last == ".."))
            || last.is_empty()
    });

    let up = collapse_dot_segments(&mut src_path);

    // Relative results may keep climbing above their first segment
    if !must_end_abs && !remove_all_dots {
        for _ in 0..up {
            src_path.insert(0, String::from(".."));
        }
    }

    if must_end_abs && !is_absolute_segment(src_path.first()) {
        src_path.insert(0, String::new());
    }

    if has_trailing_slash && !src_path.join("/").ends_with('/') {
        src_path.push(String::new());
    }

    let is_absolute = is_absolute_segment(src_path.first());

    if mode == MergeMode::HostInPath {
        unfold_host(&mut result, &mut src_path, is_absolute);
    }

    must_end_abs = must_end_abs || (truthy(result.host.as_ref()) && !src_path.is_empty());

    if must_end_abs && !is_absolute {
        src_path.insert(0, String::new());
    }

    if src_path.is_empty() {
        result.pathname = None;
        result.path = None;
    } else {
        result.pathname = Some(src_path.join("/"));
    }

    if result.pathname.is_some() || result.search.is_some() {
        result.path = Some(result.joined_path());
    }
    if truthy(relative.auth.as_ref()) {
        result.auth = relative.auth;
    }
    result.slashes = either_slashes(result.slashes, relative.slashes);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::vec;

    fn strings(parts: &[&str]) -> Vec<String> {
        parts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_collapse_dot_segments() {
        let mut path = strings(&["", "a", "b", "..", "c", ".", "d"]);
        assert_eq!(collapse_dot_segments(&mut path), 0);
        assert_eq!(path, strings(&["", "a", "c", "d"]));

        let mut path = strings(&["a", "..", "..", "..", "b"]);
        assert_eq!(collapse_dot_segments(&mut path), 2);
        assert_eq!(path, strings(&["b"]));
    }

    #[test]
    fn test_merge_mode() {
        assert_eq!(MergeMode::for_protocol(Some("http:")), MergeMode::Slashed);
        assert_eq!(MergeMode::for_protocol(None), MergeMode::Slashed);
        assert_eq!(MergeMode::for_protocol(Some("")), MergeMode::Slashed);
        assert_eq!(MergeMode::for_protocol(Some("mailto:")), MergeMode::HostInPath);
    }

    #[test]
    fn test_fold_and_unfold_host() {
        let mut result = ParsedUrl::parse("mailto:user@host", false, true);
        let mut relative = ParsedUrl::new();
        let mut src_path = Vec::new();
        let mut rel_path = vec![String::from("x")];
        fold_host_into_path(&mut result, &mut relative, &mut src_path, &mut rel_path);
        assert_eq!(src_path, strings(&["host"]));
        assert_eq!(rel_path, strings(&["x"]));
        assert_eq!(result.host.as_deref(), Some(""));
        assert_eq!(result.hostname.as_deref(), Some(""));

        unfold_host(&mut result, &mut src_path, false);
        assert_eq!(result.host.as_deref(), Some("host"));
        assert!(src_path.is_empty());
    }

    #[test]
    fn test_fold_relative_host_with_same_scheme() {
        let mut result = ParsedUrl::parse("mailto:a@b", false, true);
        let mut relative = ParsedUrl::parse("mailto:c@d", false, true);
        let mut src_path = Vec::new();
        let mut rel_path = Vec::new();
        fold_host_into_path(&mut result, &mut relative, &mut src_path, &mut rel_path);
        assert_eq!(rel_path, strings(&["d"]));
        assert_eq!(relative.host, None);
        assert_eq!(relative.hostname, None);
    }

    #[test]
    fn test_split_auth_from_host() {
        let mut url = ParsedUrl {
            host: Some(String::from("a@b@c")),
            ..ParsedUrl::default()
        };
        split_auth_from_host(&mut url);
        assert_eq!(url.auth.as_deref(), Some("a"));
        assert_eq!(url.host.as_deref(), Some("b"));
        assert_eq!(url.hostname.as_deref(), Some("b"));

        // A leading `@` is not auth
        let mut url = ParsedUrl {
            host: Some(String::from("@b")),
            ..ParsedUrl::default()
        };
        split_auth_from_host(&mut url);
        assert_eq!(url.auth, None);
        assert_eq!(url.host.as_deref(), Some("@b"));
    }

    #[test]
    fn test_hash_always_replaced() {
        let base = ParsedUrl::parse("http://a.com/p#old", false, true);
        let result = base.resolve_object("");
        assert_eq!(result.hash, None);
        assert_eq!(result.href(), "http://a.com/p");

        let result = base.resolve_object("#new");
        assert_eq!(result.href(), "http://a.com/p#new");
    }

    #[test]
    fn test_scheme_change_derives_host() {
        let base = ParsedUrl::parse("http://example.com/a", false, true);
        let result = base.resolve_object("https:/p/a/t/h?s#hash2");
        assert_eq!(result.host.as_deref(), Some("p"));
        assert_eq!(result.hostname.as_deref(), Some("p"));
        assert_eq!(result.pathname.as_deref(), Some("/a/t/h"));
        assert_eq!(result.path.as_deref(), Some("/a/t/h?s"));
        assert_eq!(result.href(), "https://p/a/t/h?s#hash2");
    }

    #[test]
    fn test_unknown_scheme_is_absolute() {
        let base = ParsedUrl::parse("http://example.com/a", false, true);
        let relative = ParsedUrl::parse("mailto:x@y", false, true);
        assert_eq!(base.resolve_object(&relative), relative);
    }

    #[test]
    fn test_empty_source() {
        let result = resolve_object("", "//host/p");
        assert_eq!(result.host.as_deref(), Some("host"));
        assert_eq!(result.pathname.as_deref(), Some("/p"));
    }

    #[test]
    fn test_search_only() {
        let base = ParsedUrl::parse("http://a/b/c/d;p?q", false, true);
        let result = base.resolve_object("?y");
        assert_eq!(result.search.as_deref(), Some("?y"));
        assert_eq!(result.path.as_deref(), Some("/b/c/d;p?y"));
    }

    #[test]
    fn test_no_path_at_all() {
        let base = ParsedUrl::parse("mailto:", false, true);
        let result = base.resolve_object("#x");
        assert_eq!(result.pathname, None);
        assert_eq!(result.path, None);
        assert_eq!(result.hash.as_deref(), Some("#x"));
    }
}
