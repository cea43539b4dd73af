//! Pre-flight filesystem checks.
//!
//! Every path-consuming command runs these before mutating anything.
//! Checks are live stats at the moment of use — outcomes are never
//! cached, because the filesystem can change between the user typing a
//! command and it executing. A pass is therefore advisory: operations
//! still classify a later failure as an operation error, not a bug.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{EngineError, ValidationError};

/// Allowed length of a created or renamed file name.
const NAME_MIN_LEN: usize = 3;
const NAME_MAX_LEN: usize = 255;

/// Require `path` to be an existing, accessible directory.
///
/// Missing paths and non-directories map to `NoSuchDirectory`; a
/// directory that exists but cannot be read maps to `PermissionDenied`.
pub fn ensure_directory(path: &Path) -> Result<(), EngineError> {
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ValidationError::NoSuchDirectory(path.to_path_buf()).into());
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(ValidationError::PermissionDenied(path.to_path_buf()).into());
        }
        Err(e) => return Err(e.into()),
    };

    if !metadata.is_dir() {
        return Err(ValidationError::NoSuchDirectory(path.to_path_buf()).into());
    }

    // Traverse/read permission: opening the directory listing is the
    // check; the iterator is dropped unread.
    match fs::read_dir(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            Err(ValidationError::PermissionDenied(path.to_path_buf()).into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Require `path` to be an existing, readable regular file.
pub fn ensure_file(path: &Path) -> Result<(), EngineError> {
    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ValidationError::NoSuchFile(path.to_path_buf()).into());
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(ValidationError::PermissionDenied(path.to_path_buf()).into());
        }
        Err(e) => return Err(e.into()),
    };

    if !metadata.is_file() {
        return Err(ValidationError::NoSuchFile(path.to_path_buf()).into());
    }

    match fs::File::open(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            Err(ValidationError::PermissionDenied(path.to_path_buf()).into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Require that nothing occupies `path`.
///
/// Symlinks count as occupants even when dangling, so the check does
/// not follow them.
pub fn ensure_absent(path: &Path) -> Result<(), EngineError> {
    match fs::symlink_metadata(path) {
        Ok(_) => Err(ValidationError::AlreadyExists(path.to_path_buf()).into()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            Err(ValidationError::PermissionDenied(path.to_path_buf()).into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Validate a file name for `add` and `rn`.
///
/// Names are restricted to letters, digits, `_`, `.` and `-`, between
/// 3 and 255 characters. Anything else fails before any filesystem
/// access.
pub fn ensure_valid_name(name: &str) -> Result<(), EngineError> {
    let ok_len = (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&name.len());
    let ok_chars = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));

    if ok_len && ok_chars {
        Ok(())
    } else {
        Err(ValidationError::InvalidName(name.to_string()).into())
    }
}
