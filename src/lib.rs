#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod format;
mod helpers;
mod parsed_url;
mod parser;
mod query_string;
mod resolve;
mod scheme;
mod types;
mod unicode;

// Need the working directory and `std::path`
#[cfg(feature = "std")]
mod file_url;
#[cfg(feature = "std")]
mod path;

// Public API
pub use error::{Error, Result};
pub use format::{FormatOptions, format};
pub use parsed_url::{ParsedUrl, Query, UrlInput};
pub use parser::HOSTNAME_MAX_LEN;
pub use query_string::{MAX_KEYS, QueryParams};
pub use resolve::{resolve, resolve_object};
pub use types::Platform;
pub use unicode::idna::{domain_to_ascii, domain_to_unicode};

#[cfg(feature = "std")]
pub use file_url::{
    FileUrl, file_url_to_path, file_url_to_path_with, path_to_file_url, path_to_file_url_with,
};
#[cfg(feature = "std")]
pub use path::{FixedCwd, NativePaths, PathResolver};

/// Parse a URL with the legacy tolerant parser.
///
/// Shorthand for [`ParsedUrl::parse`].
pub fn parse(input: &str, parse_query_string: bool, slashes_denote_host: bool) -> ParsedUrl {
    ParsedUrl::parse(input, parse_query_string, slashes_denote_host)
}
