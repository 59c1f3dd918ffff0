//! Error types for glint-gui

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by widget lookups, setters and asset loading
#[derive(Error, Debug)]
pub enum Error {
    /// No widget (or view) of this kind is registered under the name
    #[error("no {kind} named {name:?}")]
    UnknownName { kind: &'static str, name: String },

    /// An image could not be read or decoded
    #[error("failed to load image {}: {reason}", path.display())]
    AssetLoad { path: PathBuf, reason: String },

    /// A color string could not be parsed
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}

impl Error {
    pub fn unknown(kind: &'static str, name: impl Into<String>) -> Self {
        Error::UnknownName {
            kind,
            name: name.into(),
        }
    }

    pub fn asset(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::AssetLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for glint-gui operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::unknown("Slider", "volume");
        assert_eq!(err.to_string(), "no Slider named \"volume\"");

        let err = Error::asset("icons/missing.png", "No such file or directory");
        assert_eq!(
            err.to_string(),
            "failed to load image icons/missing.png: No such file or directory"
        );
    }
}
