#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Rendering records back to strings
use legacy_url::{FormatOptions, ParsedUrl, Query, QueryParams, format};

fn record() -> ParsedUrl {
    ParsedUrl::new()
}

#[test]
fn test_format_from_fields() {
    let url = ParsedUrl {
        protocol: Some(String::from("http")),
        host: Some(String::from("example.com")),
        pathname: Some(String::from("a/b")),
        search: Some(String::from("x=1")),
        hash: Some(String::from("top")),
        ..record()
    };
    assert_eq!(url.format(), "http://example.com/a/b?x=1#top");
}

#[test]
fn test_pathname_hash_and_question_escaped() {
    let url = ParsedUrl {
        protocol: Some(String::from("http:")),
        host: Some(String::from("example.com")),
        pathname: Some(String::from("/a#b?c")),
        ..record()
    };
    assert_eq!(url.href(), "http://example.com/a%23b%3Fc");

    let reparsed = ParsedUrl::parse(&url.href(), false, false);
    assert_eq!(reparsed.pathname.as_deref(), Some("/a%23b%3Fc"));
    assert_eq!(reparsed.hash, None);
}

#[test]
fn test_search_hash_escaped() {
    let url = ParsedUrl {
        pathname: Some(String::from("/p")),
        search: Some(String::from("?a#b")),
        ..record()
    };
    assert_eq!(url.href(), "/p?a%23b");
}

#[test]
fn test_hostname_and_port_when_host_missing() {
    let url = ParsedUrl {
        protocol: Some(String::from("https:")),
        hostname: Some(String::from("::1")),
        port: Some(String::from("8443")),
        pathname: Some(String::from("/")),
        ..record()
    };
    assert_eq!(url.href(), "https://[::1]:8443/");

    let url = ParsedUrl {
        protocol: Some(String::from("https:")),
        hostname: Some(String::from("example.com")),
        port: Some(String::from("8443")),
        auth: Some(String::from("me")),
        ..record()
    };
    assert_eq!(url.href(), "https://me@example.com:8443");
}

#[test]
fn test_auth_escaped() {
    let url = ParsedUrl {
        protocol: Some(String::from("http:")),
        auth: Some(String::from("us er:p@ss")),
        host: Some(String::from("h")),
        ..record()
    };
    assert_eq!(url.href(), "http://us%20er:p%40ss@h");
}

#[test]
fn test_auth_needs_host() {
    let url = ParsedUrl {
        auth: Some(String::from("me")),
        pathname: Some(String::from("/p")),
        ..record()
    };
    assert_eq!(url.href(), "/p");
}

#[test]
fn test_parsed_query_used_without_search() {
    let mut params = QueryParams::new();
    params.append("a", "1");
    params.append("b", "x y");
    params.append("a", "2");
    let url = ParsedUrl {
        protocol: Some(String::from("http:")),
        host: Some(String::from("q.com")),
        pathname: Some(String::from("/")),
        query: Some(Query::Parsed(params)),
        ..record()
    };
    assert_eq!(url.href(), "http://q.com/?a=1&a=2&b=x%20y");

    // A raw query is ignored
    let url = ParsedUrl {
        pathname: Some(String::from("/")),
        query: Some(Query::Raw(String::from("a=1"))),
        ..record()
    };
    assert_eq!(url.href(), "/");
}

#[test]
fn test_file_scheme_keeps_slashes() {
    let url = ParsedUrl {
        protocol: Some(String::from("file:")),
        pathname: Some(String::from("/etc/hosts")),
        ..record()
    };
    assert_eq!(url.href(), "file:///etc/hosts");

    let url = ParsedUrl {
        protocol: Some(String::from("http:")),
        pathname: Some(String::from("/x")),
        ..record()
    };
    assert_eq!(url.href(), "http:/x");
}

#[test]
fn test_slashes_prefix_pathname() {
    let url = ParsedUrl {
        protocol: Some(String::from("foo:")),
        slashes: Some(true),
        host: Some(String::from("h")),
        pathname: Some(String::from("rel")),
        ..record()
    };
    assert_eq!(url.href(), "foo://h/rel");
}

#[test]
fn test_format_options() {
    let input = "http://user:pw@example.com/p?q=1#frag";
    let defaults = FormatOptions::default();
    assert_eq!(format(input, &defaults), input);

    let options = FormatOptions {
        auth: false,
        fragment: false,
        ..FormatOptions::default()
    };
    assert_eq!(format(input, &options), "http://example.com/p?q=1");

    let options = FormatOptions {
        search: false,
        ..FormatOptions::default()
    };
    assert_eq!(format(input, &options), "http://user:pw@example.com/p#frag");

    let url = ParsedUrl::parse(input, false, false);
    assert_eq!(format(&url, &defaults), input);
    assert_eq!(url.format_with(&options), "http://user:pw@example.com/p#frag");
}

#[test]
fn test_format_string_normalizes() {
    let defaults = FormatOptions::default();
    assert_eq!(format(" HTTP://Example.com ", &defaults), "http://example.com/");
    assert_eq!(format("http://a.com\\b\\c", &defaults), "http://a.com/b/c");
}
