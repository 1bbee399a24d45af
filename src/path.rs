//! Path resolution for the file-URL bridge.
//!
//! Conversions need an absolute, normalized path. [`PathResolver`] supplies
//! one: [`NativePaths`] resolves against the process working directory,
//! [`FixedCwd`] against an explicit one so conversions are reproducible on
//! any host.

use crate::compat::{String, ToString, Vec, format};
use crate::error::{Error, Result};
use crate::types::Platform;

/// Turns a possibly relative path into an absolute, normalized one
pub trait PathResolver {
    /// Path conventions to resolve with
    fn platform(&self) -> Platform;

    /// Resolve `path` into an absolute path with `.`/`..` collapsed
    fn resolve(&self, path: &str) -> Result<String>;
}

/// Resolves against the working directory of the current process,
/// read only when a path is not already absolute.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativePaths;

impl PathResolver for NativePaths {
    fn platform(&self) -> Platform {
        Platform::native()
    }

    fn resolve(&self, path: &str) -> Result<String> {
        let platform = self.platform();
        let cwd = if needs_working_directory(path, platform) {
            let cwd = std::env::current_dir().map_err(|_| Error::WorkingDirectory)?;
            cwd.to_str().ok_or(Error::WorkingDirectory)?.to_string()
        } else {
            String::new()
        };
        Ok(resolve_path(platform, &cwd, path))
    }
}

/// Resolves against a fixed working directory with fixed conventions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCwd {
    platform: Platform,
    cwd: String,
}

impl FixedCwd {
    pub fn new(platform: Platform, cwd: impl Into<String>) -> Self {
        Self {
            platform,
            cwd: cwd.into(),
        }
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }
}

impl PathResolver for FixedCwd {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn resolve(&self, path: &str) -> Result<String> {
        Ok(resolve_path(self.platform, &self.cwd, path))
    }
}

/// Resolve `path` against `cwd` using the conventions of `platform`
pub fn resolve_path(platform: Platform, cwd: &str, path: &str) -> String {
    match platform {
        Platform::Posix => resolve_posix(cwd, path),
        Platform::Windows => resolve_windows(cwd, path),
    }
}

fn needs_working_directory(path: &str, platform: Platform) -> bool {
    match platform {
        Platform::Posix => !path.starts_with('/'),
        Platform::Windows => {
            let root = WindowsRoot::split(path);
            !(root.absolute && !root.device.is_empty())
        }
    }
}

fn is_windows_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Collapse `.`, `..` and empty segments. Leading `..` survive only when
/// the path may climb above its root.
fn normalize_segments(
    path: &str,
    is_separator: fn(char) -> bool,
    separator: &str,
    allow_above_root: bool,
) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if allow_above_root {
                    parts.push("..");
                }
            }
            _ => parts.push(segment),
        }
    }
    parts.join(separator)
}

fn resolve_posix(cwd: &str, path: &str) -> String {
    let joined = if path.starts_with('/') || cwd.is_empty() {
        path.to_string()
    } else {
        format!("{cwd}/{path}")
    };
    let absolute = joined.starts_with('/');
    let normalized = normalize_segments(&joined, |c| c == '/', "/", !absolute);
    if absolute {
        format!("/{normalized}")
    } else if normalized.is_empty() {
        String::from(".")
    } else {
        normalized
    }
}

/// Root of a Windows path: drive (`C:`) or UNC share (`\\server\share`),
/// whether it is anchored at a root, and what follows.
#[derive(Debug, PartialEq, Eq)]
struct WindowsRoot<'a> {
    device: String,
    absolute: bool,
    tail: &'a str,
}

impl<'a> WindowsRoot<'a> {
    fn split(path: &'a str) -> Self {
        let bytes = path.as_bytes();
        let is_sep = |b: u8| b == b'/' || b == b'\\';

        match bytes {
            [first, second, ..] if is_sep(*first) && is_sep(*second) => {
                Self::split_unc(path).unwrap_or(Self {
                    device: String::new(),
                    absolute: true,
                    tail: &path[1..],
                })
            }
            [first, ..] if is_sep(*first) => Self {
                device: String::new(),
                absolute: true,
                tail: &path[1..],
            },
            [drive, b':', rest @ ..] if drive.is_ascii_alphabetic() => {
                let absolute = rest.first().is_some_and(|b| is_sep(*b));
                Self {
                    device: path[..2].to_string(),
                    absolute,
                    tail: &path[if absolute { 3 } else { 2 }..],
                }
            }
            _ => Self {
                device: String::new(),
                absolute: false,
                tail: path,
            },
        }
    }

    fn split_unc(path: &'a str) -> Option<Self> {
        let rest = &path[2..];
        let server_end = rest.find(is_windows_separator).filter(|end| *end > 0)?;
        let after_server = &rest[server_end..];
        let share_start = after_server.find(|c| !is_windows_separator(c))?;
        let share = &after_server[share_start..];
        let share_end = share.find(is_windows_separator).unwrap_or(share.len());
        Some(Self {
            device: format!("\\\\{}\\{}", &rest[..server_end], &share[..share_end]),
            absolute: true,
            tail: &share[share_end..],
        })
    }
}

#[derive(Default)]
struct WindowsResolution {
    device: String,
    tail: String,
    absolute: bool,
}

impl WindowsResolution {
    /// Prepend `root` unless it names another device. Returns true once the
    /// result is anchored on a device.
    fn absorb(&mut self, root: WindowsRoot<'_>) -> bool {
        if !root.device.is_empty()
            && !self.device.is_empty()
            && !root.device.eq_ignore_ascii_case(&self.device)
        {
            return false;
        }
        if self.device.is_empty() {
            self.device = root.device;
        }
        if !self.absolute {
            self.tail = format!("{}\\{}", root.tail, self.tail);
            self.absolute = root.absolute;
        }
        self.is_complete()
    }

    fn is_complete(&self) -> bool {
        self.absolute && !self.device.is_empty()
    }
}

fn resolve_windows(cwd: &str, path: &str) -> String {
    let mut resolution = WindowsResolution::default();

    if !resolution.absorb(WindowsRoot::split(path)) {
        resolution.absorb(WindowsRoot::split(cwd));
    }
    // Drive-relative path on a drive other than the working directory's
    if !resolution.is_complete() && !resolution.device.is_empty() {
        let drive_root = format!("{}\\", resolution.device);
        resolution.absorb(WindowsRoot::split(&drive_root));
    }

    let tail = normalize_segments(
        &resolution.tail,
        is_windows_separator,
        "\\",
        !resolution.absolute,
    );
    if resolution.absolute {
        format!("{}\\{tail}", resolution.device)
    } else if resolution.device.is_empty() && tail.is_empty() {
        String::from(".")
    } else {
        format!("{}{tail}", resolution.device)
    }
}
