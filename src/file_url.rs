//! Conversions between filesystem paths and `file:` URLs

use std::path::{Path, PathBuf};

use crate::compat::{String, ToString, Vec, format};
use crate::error::{Error, Result};
use crate::parsed_url::{ParsedUrl, UrlInput};
use crate::path::{NativePaths, PathResolver};
use crate::types::Platform;
use crate::unicode::idna::{domain_to_ascii, domain_to_unicode};
use crate::unicode::percent_encode::{
    FILE_PATH_SET, encode_path_chars, percent_decode, percent_encode_with_set,
};

/// A `file:` URL built from a filesystem path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUrl {
    hostname: String,
    pathname: String,
}

impl FileUrl {
    pub fn protocol(&self) -> &'static str {
        "file:"
    }

    /// UNC server name, empty for local paths
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Percent-encoded path, always starting with `/`
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn href(&self) -> String {
        format!("file://{}{}", self.hostname, self.pathname)
    }

    /// The same URL as a legacy record
    pub fn to_parsed(&self) -> ParsedUrl {
        ParsedUrl {
            protocol: Some(String::from("file:")),
            slashes: Some(true),
            host: Some(self.hostname.clone()),
            hostname: Some(self.hostname.clone()),
            pathname: Some(self.pathname.clone()),
            path: Some(self.pathname.clone()),
            ..ParsedUrl::default()
        }
    }
}

impl core::fmt::Display for FileUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "file://{}{}", self.hostname, self.pathname)
    }
}

/// Convert a path to a `file:` URL, resolving it against the working
/// directory of the current process.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)]
/// # {
/// let url = legacy_url::path_to_file_url("/tmp/a b.txt").unwrap();
/// assert_eq!(url.pathname(), "/tmp/a%20b.txt");
/// assert_eq!(url.href(), "file:///tmp/a%20b.txt");
/// # }
/// ```
pub fn path_to_file_url(path: impl AsRef<Path>) -> Result<FileUrl> {
    let path = path.as_ref().to_str().ok_or(Error::InvalidArgType)?;
    path_to_file_url_with(path, &NativePaths)
}

/// Convert a path to a `file:` URL using the conventions and working
/// directory of `resolver`
pub fn path_to_file_url_with(path: &str, resolver: &impl PathResolver) -> Result<FileUrl> {
    let platform = resolver.platform();
    if platform.is_windows() && path.starts_with("\\\\") {
        return unc_to_file_url(path);
    }

    let mut resolved = resolver.resolve(path)?;
    // Resolution strips the trailing separator, keep it as a directory marker
    let had_trailing_separator =
        path.ends_with('/') || (platform.is_windows() && path.ends_with('\\'));
    if had_trailing_separator && !resolved.ends_with(platform.separator()) {
        resolved.push('/');
    }

    let encoded = encode_path_chars(&resolved, platform);
    let pathname = if platform.is_windows() {
        format!("/{}", encoded.replace('\\', "/"))
    } else {
        encoded.into_owned()
    };
    Ok(FileUrl {
        hostname: String::new(),
        pathname: percent_encode_with_set(&pathname, FILE_PATH_SET),
    })
}

/// `\\server\share\rest`: the server becomes the hostname
fn unc_to_file_url(path: &str) -> Result<FileUrl> {
    let parts: Vec<&str> = path.split('\\').collect();
    if parts.len() <= 3 {
        return Err(Error::InvalidArgValue("Missing UNC resource path"));
    }
    let server = parts[2];
    if server.is_empty() {
        return Err(Error::InvalidArgValue("Empty UNC servername"));
    }
    let resource = parts[3..].join("/");
    let encoded = encode_path_chars(&resource, Platform::Windows);
    Ok(FileUrl {
        hostname: domain_to_ascii(server),
        pathname: percent_encode_with_set(&format!("/{encoded}"), FILE_PATH_SET),
    })
}

/// Convert a `file:` URL to a path for the current platform.
/// Strings are parsed with the legacy parser first.
pub fn file_url_to_path<'a>(url: impl Into<UrlInput<'a>>) -> Result<PathBuf> {
    file_url_to_path_with(url, Platform::native()).map(PathBuf::from)
}

/// Convert a `file:` URL to a path string using the conventions of `platform`
pub fn file_url_to_path_with<'a>(url: impl Into<UrlInput<'a>>, platform: Platform) -> Result<String> {
    let url = url.into().into_parsed_with(false, true);
    if url.protocol.as_deref() != Some("file:") {
        return Err(Error::InvalidUrlScheme);
    }

    let hostname = match url.hostname.as_deref() {
        None | Some("localhost") => "",
        Some(hostname) => hostname,
    };
    let pathname = url.pathname.as_deref().unwrap_or("");
    match platform {
        Platform::Posix => posix_path(hostname, pathname),
        Platform::Windows => windows_path(hostname, pathname),
    }
}

/// Find `%2F`/`%2f`, and `%5C`/`%5c` as well when `backslash` is set
fn has_encoded_separator(pathname: &str, backslash: bool) -> bool {
    let bytes = pathname.as_bytes();
    memchr::memchr_iter(b'%', bytes).any(|at| match bytes.get(at + 1..at + 3) {
        Some([b'2', third]) => third.eq_ignore_ascii_case(&b'f'),
        Some([b'5', third]) => backslash && third.eq_ignore_ascii_case(&b'c'),
        _ => false,
    })
}

fn decode_path(pathname: &str) -> Result<String> {
    percent_decode(pathname).ok_or(Error::InvalidFileUrlPath("must be valid UTF-8"))
}

fn posix_path(hostname: &str, pathname: &str) -> Result<String> {
    if !hostname.is_empty() {
        return Err(Error::InvalidFileUrlHost(Platform::Posix));
    }
    if has_encoded_separator(pathname, false) {
        return Err(Error::InvalidFileUrlPath("must not include encoded / characters"));
    }
    decode_path(pathname)
}

fn windows_path(hostname: &str, pathname: &str) -> Result<String> {
    if has_encoded_separator(pathname, true) {
        return Err(Error::InvalidFileUrlPath(
            "must not include encoded \\ or / characters",
        ));
    }
    let pathname = decode_path(&pathname.replace('/', "\\"))?;

    if !hostname.is_empty() {
        // UNC path
        return Ok(format!("\\\\{}{pathname}", domain_to_unicode(hostname)));
    }

    match pathname.as_bytes() {
        [_, letter, b':', ..] if letter.is_ascii_alphabetic() => Ok(pathname[1..].to_string()),
        _ => Err(Error::InvalidFileUrlPath("must be absolute")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::path::FixedCwd;

    fn posix() -> FixedCwd {
        FixedCwd::new(Platform::Posix, "/home/user")
    }

    fn windows() -> FixedCwd {
        FixedCwd::new(Platform::Windows, "C:\\Users\\me")
    }

    #[test]
    fn test_posix_path_to_url() {
        let url = path_to_file_url_with("/tmp/a b.txt", &posix()).unwrap();
        assert_eq!(url.pathname(), "/tmp/a%20b.txt");
        assert_eq!(url.hostname(), "");
        assert_eq!(url.href(), "file:///tmp/a%20b.txt");
        assert_eq!(url.to_string(), url.href());
        assert_eq!(url.protocol(), "file:");
    }

    #[test]
    fn test_posix_special_characters() {
        let url = path_to_file_url_with("/a/100%/#?\\\n", &posix()).unwrap();
        assert_eq!(url.pathname(), "/a/100%25/%23%3F%5C%0A");

        let url = path_to_file_url_with("/café", &posix()).unwrap();
        assert_eq!(url.pathname(), "/caf%C3%A9");
    }

    #[test]
    fn test_relative_and_trailing_slash() {
        let url = path_to_file_url_with("docs/", &posix()).unwrap();
        assert_eq!(url.pathname(), "/home/user/docs/");

        let url = path_to_file_url_with("./x/../y", &posix()).unwrap();
        assert_eq!(url.pathname(), "/home/user/y");

        let url = path_to_file_url_with("/", &posix()).unwrap();
        assert_eq!(url.pathname(), "/");
    }

    #[test]
    fn test_windows_path_to_url() {
        let url = path_to_file_url_with("C:\\Program Files\\app\\", &windows()).unwrap();
        assert_eq!(url.pathname(), "/C:/Program%20Files/app/");

        let url = path_to_file_url_with("notes.txt", &windows()).unwrap();
        assert_eq!(url.href(), "file:///C:/Users/me/notes.txt");
    }

    #[test]
    fn test_unc_path_to_url() {
        let url = path_to_file_url_with("\\\\server\\share\\dir\\f.txt", &windows()).unwrap();
        assert_eq!(url.hostname(), "server");
        assert_eq!(url.pathname(), "/share/dir/f.txt");
        assert_eq!(url.href(), "file://server/share/dir/f.txt");

        assert_eq!(
            path_to_file_url_with("\\\\server", &windows()),
            Err(Error::InvalidArgValue("Missing UNC resource path"))
        );
        assert_eq!(
            path_to_file_url_with("\\\\\\share\\x", &windows()),
            Err(Error::InvalidArgValue("Empty UNC servername"))
        );
    }

    #[test]
    fn test_url_to_posix_path() {
        assert_eq!(
            file_url_to_path_with("file:///tmp/a%20b.txt", Platform::Posix).unwrap(),
            "/tmp/a b.txt"
        );
        assert_eq!(
            file_url_to_path_with("file://localhost/etc/hosts", Platform::Posix).unwrap(),
            "/etc/hosts"
        );
        assert_eq!(
            file_url_to_path_with("file://example.com/x", Platform::Posix),
            Err(Error::InvalidFileUrlHost(Platform::Posix))
        );
        assert_eq!(
            file_url_to_path_with("file:///a%2Fb", Platform::Posix),
            Err(Error::InvalidFileUrlPath("must not include encoded / characters"))
        );
        // Backslashes are ordinary characters on POSIX
        assert_eq!(
            file_url_to_path_with("file:///a%5Cb", Platform::Posix).unwrap(),
            "/a\\b"
        );
    }

    #[test]
    fn test_url_to_windows_path() {
        assert_eq!(
            file_url_to_path_with("file:///C:/Program%20Files/app", Platform::Windows).unwrap(),
            "C:\\Program Files\\app"
        );
        assert_eq!(
            file_url_to_path_with("file://server/share/f.txt", Platform::Windows).unwrap(),
            "\\\\server\\share\\f.txt"
        );
        assert_eq!(
            file_url_to_path_with("file:///tmp/x", Platform::Windows),
            Err(Error::InvalidFileUrlPath("must be absolute"))
        );
        assert_eq!(
            file_url_to_path_with("file:///C:/a%5cb", Platform::Windows),
            Err(Error::InvalidFileUrlPath("must not include encoded \\ or / characters"))
        );
    }

    #[test]
    fn test_scheme_must_be_file() {
        assert_eq!(
            file_url_to_path_with("http://example.com/x", Platform::Posix),
            Err(Error::InvalidUrlScheme)
        );
        let parsed = ParsedUrl::parse("FILE:///x", false, true);
        assert_eq!(file_url_to_path_with(&parsed, Platform::Posix).unwrap(), "/x");
    }

    #[test]
    fn test_roundtrip() {
        for path in ["/tmp/a b.txt", "/srv/100%/x#y", "/ünï/cödé", "/a\\b"] {
            let url = path_to_file_url_with(path, &posix()).unwrap();
            assert_eq!(file_url_to_path_with(&url, Platform::Posix).unwrap(), path);
        }
        let url = path_to_file_url_with("D:\\data\\r&d #1", &windows()).unwrap();
        assert_eq!(
            file_url_to_path_with(&url, Platform::Windows).unwrap(),
            "D:\\data\\r&d #1"
        );
    }
}
