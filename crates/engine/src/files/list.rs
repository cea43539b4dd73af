//! Directory listing.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{EngineError, ValidationError};

/// Kind of a listed entry. Anything that is not a directory (regular
/// files, symlinks, devices) is reported as a file, matching what a
/// user of the listing cares about: can I `cd` into it or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Entry name (not full path).
    pub name: String,
    /// Entry kind.
    pub kind: EntryKind,
}

/// List the contents of a directory.
///
/// Directories sort before files; within each group names sort
/// case-insensitively. Entries whose metadata cannot be read are
/// skipped; an unreadable directory itself is an error.
pub fn list_directory(path: &Path) -> Result<Vec<DirEntry>, EngineError> {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ValidationError::NoSuchDirectory(path.to_path_buf()).into());
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(ValidationError::PermissionDenied(path.to_path_buf()).into());
        }
        Err(e) => return Err(e.into()),
    };

    let mut results = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let name = entry.file_name().to_string_lossy().to_string();

        // Follows symlinks, like the stat the original listing used.
        let kind = match fs::metadata(entry.path()) {
            Ok(m) if m.is_dir() => EntryKind::Directory,
            Ok(_) => EntryKind::File,
            Err(_) => continue,
        };

        results.push(DirEntry { name, kind });
    }

    results.sort_by(|a, b| {
        let a_is_dir = a.kind == EntryKind::Directory;
        let b_is_dir = b.kind == EntryKind::Directory;
        match (a_is_dir, b_is_dir) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    });

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_directory_sorts_dirs_first_then_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("zebra.txt"), "z").unwrap();
        fs::write(temp_dir.path().join("apple.txt"), "a").unwrap();
        fs::create_dir(temp_dir.path().join("beta_dir")).unwrap();
        fs::create_dir(temp_dir.path().join("alpha_dir")).unwrap();

        let entries = list_directory(temp_dir.path()).unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alpha_dir", "beta_dir", "apple.txt", "zebra.txt"]);
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[2].kind, EntryKind::File);
    }

    #[test]
    fn test_list_directory_sort_is_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Beta.txt"), "").unwrap();
        fs::write(temp_dir.path().join("alpha.txt"), "").unwrap();

        let entries = list_directory(temp_dir.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alpha.txt", "Beta.txt"]);
    }

    #[test]
    fn test_list_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let entries = list_directory(temp_dir.path()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_list_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = list_directory(&temp_dir.path().join("nope"));
        assert!(matches!(
            result,
            Err(EngineError::Validation(ValidationError::NoSuchDirectory(_)))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_list_includes_symlinks_as_files() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.txt");
        fs::write(&target, "data").unwrap();
        symlink(&target, temp_dir.path().join("link")).unwrap();

        let entries = list_directory(temp_dir.path()).unwrap();
        let link = entries.iter().find(|e| e.name == "link").unwrap();
        assert_eq!(link.kind, EntryKind::File);
    }
}
