use crate::checkers::split_port;
use crate::compat::String;
use crate::format::FormatOptions;
use crate::query_string::QueryParams;

/// Query component of a [`ParsedUrl`]: raw text or a decoded mapping,
/// depending on how the URL was parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Search string without the leading `?`
    Raw(String),
    /// Decoded mapping (parsed with `parse_query_string = true`)
    Parsed(QueryParams),
}

impl Query {
    /// Raw text, if this query was not decoded
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Raw(raw) => Some(raw),
            Self::Parsed(_) => None,
        }
    }

    /// Decoded mapping, if this query was decoded
    pub fn as_params(&self) -> Option<&QueryParams> {
        match self {
            Self::Raw(_) => None,
            Self::Parsed(params) => Some(params),
        }
    }
}

/// A URL decomposed by the legacy tolerant parser.
///
/// Every component is optional: `None` means the component never appeared,
/// `Some("")` means it appeared empty. After [`ParsedUrl::parse`]:
/// - `host == hostname + ":" + port` whenever both are present
/// - `path == pathname + search` whenever either is present
///
/// Fields may be mutated freely; [`ParsedUrl::href`] always reflects the
/// current fields because it is derived on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Lower-cased scheme including the trailing `:` (e.g. "http:")
    pub protocol: Option<String>,
    /// Whether `//` followed the scheme
    pub slashes: Option<bool>,
    /// Percent-decoded user-info (e.g. "user:pass")
    pub auth: Option<String>,
    /// Hostname plus `:port`, IPv6 literals keep their brackets
    pub host: Option<String>,
    pub port: Option<String>,
    /// Lower-cased, ASCII-encoded hostname, IPv6 literals without brackets
    pub hostname: Option<String>,
    /// Fragment including the leading `#`
    pub hash: Option<String>,
    /// Query string including the leading `?`
    pub search: Option<String>,
    pub query: Option<Query>,
    pub pathname: Option<String>,
    /// `pathname + search`
    pub path: Option<String>,
}

impl ParsedUrl {
    /// Create an empty record with every component absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a URL with the legacy tolerant parser. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use legacy_url::ParsedUrl;
    ///
    /// let url = ParsedUrl::parse("http://user@Example.com:8080/a?x=1#top", false, false);
    /// assert_eq!(url.hostname.as_deref(), Some("example.com"));
    /// assert_eq!(url.port.as_deref(), Some("8080"));
    /// assert_eq!(url.path.as_deref(), Some("/a?x=1"));
    /// ```
    pub fn parse(input: &str, parse_query_string: bool, slashes_denote_host: bool) -> Self {
        crate::parser::parse_url(input, parse_query_string, slashes_denote_host)
    }

    /// Serialize the current fields.
    pub fn href(&self) -> String {
        self.format()
    }

    /// Serialize with the default [`FormatOptions`]
    pub fn format(&self) -> String {
        crate::format::format_url(self, &FormatOptions::default())
    }

    pub fn format_with(&self, options: &FormatOptions) -> String {
        crate::format::format_url(self, options)
    }

    /// Resolve `relative` against this URL and serialize the result
    pub fn resolve(&self, relative: &str) -> String {
        self.resolve_object(relative).format()
    }

    /// Resolve a relative reference (string or record) against this URL
    pub fn resolve_object<'a>(&self, relative: impl Into<UrlInput<'a>>) -> ParsedUrl {
        let relative = relative.into().into_parsed_with(false, true);
        crate::resolve::resolve_parsed(self, &relative)
    }

    /// Re-derive `hostname` and `port` from `host`.
    /// A trailing `:digits` becomes the port; `hostname` is only touched when
    /// something remains after removing it.
    pub fn parse_host(&mut self) {
        let Some(host) = self.host.as_deref() else {
            return;
        };
        let (hostname, port) = split_port(host);
        let port = port.map(String::from);
        let hostname = (!hostname.is_empty()).then(|| String::from(hostname));
        if port.is_some() {
            self.port = port;
        }
        if hostname.is_some() {
            self.hostname = hostname;
        }
    }

    /// Recompute `path` when `pathname` or `search` is non-empty
    pub(crate) fn sync_path(&mut self) {
        let has_pathname = self.pathname.as_deref().is_some_and(|p| !p.is_empty());
        let has_search = self.search.as_deref().is_some_and(|s| !s.is_empty());
        if has_pathname || has_search {
            self.path = Some(self.joined_path());
        }
    }

    /// `pathname + search`, treating absent components as empty
    pub(crate) fn joined_path(&self) -> String {
        let mut path = String::new();
        path.push_str(self.pathname.as_deref().unwrap_or(""));
        path.push_str(self.search.as_deref().unwrap_or(""));
        path
    }
}

impl core::fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.format())
    }
}

impl core::str::FromStr for ParsedUrl {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s, false, false))
    }
}

/// A URL given either as text or as an already parsed record
#[derive(Debug, Clone, Copy)]
pub enum UrlInput<'a> {
    Str(&'a str),
    Parsed(&'a ParsedUrl),
    #[cfg(feature = "std")]
    File(&'a crate::file_url::FileUrl),
}

impl UrlInput<'_> {
    /// Obtain a record, parsing text with the given flags
    pub(crate) fn into_parsed_with(
        self,
        parse_query_string: bool,
        slashes_denote_host: bool,
    ) -> ParsedUrl {
        match self {
            Self::Str(s) => ParsedUrl::parse(s, parse_query_string, slashes_denote_host),
            Self::Parsed(url) => url.clone(),
            #[cfg(feature = "std")]
            Self::File(url) => url.to_parsed(),
        }
    }

    /// Whether this input is the empty string
    pub(crate) fn is_empty_str(&self) -> bool {
        matches!(self, Self::Str(s) if s.is_empty())
    }
}

impl<'a> From<&'a str> for UrlInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(s)
    }
}

impl<'a> From<&'a String> for UrlInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Str(s)
    }
}

impl<'a> From<&'a ParsedUrl> for UrlInput<'a> {
    fn from(url: &'a ParsedUrl) -> Self {
        Self::Parsed(url)
    }
}

#[cfg(feature = "std")]
impl<'a> From<&'a crate::file_url::FileUrl> for UrlInput<'a> {
    fn from(url: &'a crate::file_url::FileUrl) -> Self {
        Self::File(url)
    }
}
