use std::path::PathBuf;

use thiserror::Error;

use crate::format::error::ParseError;

/// Errors returned while loading database files or configuration.
///
/// # Examples
/// ```
/// use std::path::PathBuf;
///
/// use netdb_core::LoadError;
///
/// let err = LoadError::Open {
///     path: PathBuf::from("/etc/protocols"),
///     source: std::io::Error::from(std::io::ErrorKind::NotFound),
/// };
/// assert!(err.to_string().starts_with("cannot open /etc/protocols"));
/// ```
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: ParseError,
    },
    #[error("invalid configuration {}: {}", .path.display(), .source)]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
}
