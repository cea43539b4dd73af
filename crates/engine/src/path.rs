//! Path resolution against the session's current directory.
//!
//! Resolution is purely lexical: an absolute input passes through, a
//! relative input is joined onto the base, and `.`/`..` components are
//! folded without touching the filesystem. Whether the result exists is
//! the validation gate's concern, not this module's.

use std::path::{Component, Path, PathBuf};

/// Resolve a user-supplied path against a base directory.
///
/// Absolute paths are returned as-is (normalized); relative paths are
/// joined onto `base` first. Resolving an already-absolute path is
/// idempotent.
pub fn resolve(raw: &Path, base: &Path) -> PathBuf {
    if raw.is_absolute() {
        normalize(raw)
    } else {
        normalize(&base.join(raw))
    }
}

/// Fold `.` and `..` components lexically.
///
/// A `..` at the root is a no-op, so normalization never escapes the
/// root the path started on.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // pop() refuses to remove a prefix or root component,
                // which is exactly the at-root no-op we want.
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}

/// Whether two absolute paths share the same filesystem root.
///
/// On Unix every absolute path is rooted at `/`, so this only ever
/// returns false on platforms with multiple roots (drive letters, UNC
/// prefixes).
pub fn same_root(a: &Path, b: &Path) -> bool {
    root_of(a) == root_of(b)
}

/// The prefix-plus-root portion of a path, e.g. `/` or `C:\`.
fn root_of(path: &Path) -> PathBuf {
    path.components()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_joins_base() {
        let base = Path::new("/home/user");
        assert_eq!(
            resolve(Path::new("docs/notes.txt"), base),
            PathBuf::from("/home/user/docs/notes.txt")
        );
    }

    #[test]
    fn test_resolve_absolute_is_idempotent() {
        let base = Path::new("/home/user");
        let abs = Path::new("/var/log/syslog");
        let once = resolve(abs, base);
        assert_eq!(once, PathBuf::from("/var/log/syslog"));

        let twice = resolve(&once, base);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_resolve_folds_parent_components() {
        let base = Path::new("/home/user");
        assert_eq!(
            resolve(Path::new("../other"), base),
            PathBuf::from("/home/other")
        );
        assert_eq!(resolve(Path::new(".."), base), PathBuf::from("/home"));
    }

    #[test]
    fn test_normalize_current_dir_components() {
        assert_eq!(
            normalize(Path::new("/a/./b/./c")),
            PathBuf::from("/a/b/c")
        );
    }

    #[test]
    fn test_normalize_parent_at_root_is_noop() {
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("/../../a")), PathBuf::from("/a"));
    }

    #[test]
    fn test_normalize_empty_result_becomes_current_dir() {
        assert_eq!(normalize(Path::new("a/..")), PathBuf::from("."));
    }

    #[cfg(unix)]
    #[test]
    fn test_same_root_unix_absolute_paths() {
        assert!(same_root(Path::new("/home/user"), Path::new("/var/log")));
    }

    #[cfg(windows)]
    #[test]
    fn test_same_root_windows_drives() {
        assert!(same_root(Path::new("C:\\Users"), Path::new("C:\\Windows")));
        assert!(!same_root(Path::new("C:\\Users"), Path::new("D:\\Data")));
    }

    #[test]
    fn test_root_of_keeps_only_root() {
        #[cfg(unix)]
        assert_eq!(root_of(Path::new("/home/user")), PathBuf::from("/"));
        #[cfg(windows)]
        assert_eq!(root_of(Path::new("C:\\Users")), PathBuf::from("C:\\"));
    }
}
