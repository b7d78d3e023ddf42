use std::path::PathBuf;
use thiserror::Error;

/// Main error type for file operations
#[derive(Error, Debug)]
pub enum FileOpsError {
    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl FileOpsError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Io {
            source: err,
            path: path.map(|p| p.into()),
        }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Path the failure happened on, if known
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            FileOpsError::Io { path, .. } => path.as_deref(),
            FileOpsError::InvalidArgument { .. } => None,
        }
    }

    /// Kind of the underlying IO error, if this is one
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            FileOpsError::Io { source, .. } => Some(source.kind()),
            FileOpsError::InvalidArgument { .. } => None,
        }
    }
}

/// Result type for file operations
pub type FileOpsResult<T> = Result<T, FileOpsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_keeps_path() {
        let err = FileOpsError::io_error(
            io::Error::new(io::ErrorKind::NotFound, "gone"),
            Some("missing.txt"),
        );

        assert_eq!(err.path(), Some(std::path::Path::new("missing.txt")));
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
        assert_eq!(err.to_string(), "IO error: gone");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = FileOpsError::invalid_argument("search text must not be empty");
        assert!(err.path().is_none());
        assert!(err.io_kind().is_none());
        assert_eq!(
            err.to_string(),
            "Invalid argument: search text must not be empty"
        );
    }
}
