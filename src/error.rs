use crate::types::Platform;

/// Errors raised by the file-URL bridge.
///
/// Parsing, formatting and resolution never fail; only conversions between
/// file URLs and filesystem paths do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The path could not be read as UTF-8
    InvalidArgType,
    /// Malformed UNC path
    InvalidArgValue(&'static str),
    /// The URL scheme is not `file:`
    InvalidUrlScheme,
    /// The URL carries a host the platform cannot express
    InvalidFileUrlHost(Platform),
    /// Encoded separators, a missing drive letter or an undecodable path
    InvalidFileUrlPath(&'static str),
    /// The working directory could not be read
    WorkingDirectory,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidArgType => f.write_str("The \"path\" argument must be valid UTF-8"),
            Self::InvalidArgValue(reason) => write!(f, "Invalid path argument: {reason}"),
            Self::InvalidUrlScheme => f.write_str("The URL must be of scheme file"),
            Self::InvalidFileUrlHost(platform) => write!(
                f,
                "File URL host must be \"localhost\" or empty on {}",
                platform.name()
            ),
            Self::InvalidFileUrlPath(reason) => write!(f, "File URL path {reason}"),
            Self::WorkingDirectory => f.write_str("Unable to read the current working directory"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for file-URL conversions
pub type Result<T> = core::result::Result<T, Error>;
