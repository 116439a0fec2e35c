//! Crate-level error types.

use std::fmt;
use std::path::PathBuf;

/// Errors produced by the cameraman crate.
#[derive(Debug)]
pub enum CmanError {
    /// No profile exists at the given path (with or without the `.cman`
    /// extension).
    ProfileNotFound(PathBuf),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CmanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProfileNotFound(path) => {
                write!(f, "camera profile not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CmanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CmanError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
