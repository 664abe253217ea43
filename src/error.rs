//! Error types for mdword library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdword operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a Markdown guide.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input Markdown file does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Error assembling the DOCX package.
    #[error("Package error: {0}")]
    Package(String),

    /// Error serializing the element tree.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::Package(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InputNotFound(PathBuf::from("guide.md"));
        assert_eq!(err.to_string(), "Input file not found: guide.md");

        let err = Error::Package("invalid zip header".to_string());
        assert_eq!(err.to_string(), "Package error: invalid zip header");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_zip_io_error_unwraps() {
        let zip_err = zip::result::ZipError::Io(io::Error::new(io::ErrorKind::Other, "disk"));
        let err: Error = zip_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
