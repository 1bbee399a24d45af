/// Scheme classes the legacy engine distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeKind {
    /// Always rendered with `//` (http, https, ftp, gopher, file, ws, wss)
    Slashed,
    /// Never carries a host and is never auto-escaped (javascript)
    Hostless,
    /// Anything else (mailto, xmpp, custom schemes)
    #[default]
    Other,
}

impl SchemeKind {
    /// Check if this scheme always carries `//`
    pub fn is_slashed(self) -> bool {
        self == Self::Slashed
    }

    /// Check if a hostname is never meaningful for this scheme
    pub fn is_hostless(self) -> bool {
        self == Self::Hostless
    }

    /// Check if the post-host remainder must be left unescaped
    pub fn is_unsafe(self) -> bool {
        self == Self::Hostless
    }
}

/// Path conventions used by the file-URL bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    /// The platform this crate was compiled for
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    pub fn is_windows(self) -> bool {
        self == Self::Windows
    }

    /// Primary path separator
    pub fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Platform name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Self::Posix => "posix",
            Self::Windows => "win32",
        }
    }
}
