//! Path resolution for component-relative paths
//!
//! Manifest entries are resolved against the component directory with
//! join-then-normalize semantics. Normalization is purely lexical: nothing
//! here touches the file system, so paths that do not exist yet resolve the
//! same way as paths that do.

use std::path::{Component, Path, PathBuf};

/// Resolve `token` relative to `base` into a normalized absolute path
///
/// The token is always appended beneath `base`, even when it starts with a
/// separator. A relative `base` is made absolute against the current working
/// directory.
pub fn resolve(base: &Path, token: impl AsRef<Path>) -> PathBuf {
    let mut joined = absolute(base);
    for component in token.as_ref().components() {
        match component {
            // Leading separators do not reset the base
            Component::Prefix(_) | Component::RootDir => {}
            other => joined.push(other.as_os_str()),
        }
    }
    normalize(&joined)
}

/// Make `path` absolute without touching the file system
///
/// An empty path is the current working directory. Falls back to the path
/// as given when the working directory is unavailable.
pub fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize(path);
    }
    let absolute = if path.as_os_str().is_empty() {
        std::env::current_dir()
    } else {
        std::path::absolute(path)
    };
    absolute
        .map(|p| normalize(&p))
        .unwrap_or_else(|_| normalize(path))
}

/// Collapse `.` and `..` segments lexically
///
/// `..` directly under the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().map(|c| c.as_os_str()).collect()
}

/// Final path segment, extension included
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
