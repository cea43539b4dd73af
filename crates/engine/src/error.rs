//! Error types for the command engine.
//!
//! Failures are split into three classes the dispatcher can render
//! differently: bad input (nothing touched), failed pre-flight validation
//! (nothing touched), and failures during the operation itself (the
//! operation cleans up or completes before returning).

use std::path::PathBuf;

use thiserror::Error;

/// Pre-flight validation outcomes other than success.
///
/// Every variant is detected by a fresh stat before any mutation, so a
/// validation failure guarantees the filesystem was left untouched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The path does not exist or is not a directory.
    #[error("no such directory: {0}")]
    NoSuchDirectory(PathBuf),

    /// The path does not exist or is not a regular file.
    #[error("no such file: {0}")]
    NoSuchFile(PathBuf),

    /// The path exists but is not accessible.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A file already occupies the target path.
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    /// The file name fails the allowed character class or length bound.
    #[error("invalid file name: {0}")]
    InvalidName(String),

    /// Source and destination resolve to the same directory.
    #[error("source and destination are the same")]
    SameSourceAndDestination,

    /// The target's root differs from the session's root.
    #[error("cannot navigate to another root")]
    CrossRootNavigation,
}

/// Failures during the actual filesystem mutation or stream transfer.
///
/// These can occur after partial side effects; each operation either
/// completes or removes its partial results before returning one of
/// these.
#[derive(Debug, Error)]
pub enum OperationError {
    /// A read stream failed mid-transfer.
    #[error("read failed: {0}")]
    ReadFailure(#[source] std::io::Error),

    /// Copying bytes to the destination failed.
    #[error("copy failed: {0}")]
    CopyFailure(#[source] std::io::Error),

    /// Creating a file failed.
    #[error("create failed: {0}")]
    CreateFailure(#[source] std::io::Error),

    /// The rename primitive failed; the original file still exists.
    #[error("rename failed: {0}")]
    RenameFailure(#[source] std::io::Error),

    /// Deleting a file failed.
    #[error("delete failed: {0}")]
    DeleteFailure(#[source] std::io::Error),

    /// The compression chain failed; the source is intact.
    #[error("compress failed: {0}")]
    CompressFailure(#[source] std::io::Error),

    /// The decompression chain failed; the source is intact.
    #[error("decompress failed: {0}")]
    DecompressFailure(#[source] std::io::Error),
}

/// Top-level error type returned by every engine method.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Missing or malformed argument, before any filesystem access.
    #[error("invalid input: {0}")]
    Input(String),

    /// A pre-flight check failed; the filesystem was not touched.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The operation itself failed after validation passed.
    #[error(transparent)]
    Operation(#[from] OperationError),

    /// Unexpected OS error outside the classes above.
    #[error("unexpected I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// True for errors detected before any filesystem mutation.
    pub fn is_preflight(&self) -> bool {
        matches!(self, EngineError::Input(_) | EngineError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::NoSuchDirectory(PathBuf::from("/tmp/missing"));
        assert_eq!(err.to_string(), "no such directory: /tmp/missing");

        let err = ValidationError::InvalidName("a/b".to_string());
        assert_eq!(err.to_string(), "invalid file name: a/b");

        let err = ValidationError::CrossRootNavigation;
        assert_eq!(err.to_string(), "cannot navigate to another root");
    }

    #[test]
    fn test_engine_error_from_validation() {
        let err: EngineError = ValidationError::SameSourceAndDestination.into();
        assert!(matches!(err, EngineError::Validation(_)));
        assert!(err.is_preflight());
    }

    #[test]
    fn test_engine_error_from_operation() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: EngineError = OperationError::CopyFailure(io).into();
        assert!(matches!(err, EngineError::Operation(_)));
        assert!(!err.is_preflight());
    }

    #[test]
    fn test_input_error_is_preflight() {
        let err = EngineError::Input("missing argument".to_string());
        assert!(err.is_preflight());
        assert_eq!(err.to_string(), "invalid input: missing argument");
    }

    #[test]
    fn test_operation_error_carries_source() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = OperationError::CompressFailure(io);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "compress failed: denied");
    }
}
