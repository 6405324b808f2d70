//! Ignore-pattern matching.
//!
//! This is a small subset of `.gitignore` syntax built on substring tests
//! rather than globbing. Rules are checked in order and the first rule that
//! applies decides:
//!
//! 1. empty or `#`-prefixed patterns never match
//! 2. `name/` matches directories whose path contains `name`
//! 3. `**text` matches when the file name contains `text`
//! 4. `*text` matches when the full path contains `text`
//! 5. `text*` matches when any path segment contains `text`; a bare `text`
//!    must equal a segment exactly

use crate::utils::{path_segments, to_posix};
use std::path::Path;

/// Decide whether `pattern` excludes `path`.
pub fn matches(pattern: &str, path: &Path) -> bool {
    if pattern.is_empty() || pattern.starts_with('#') {
        return false;
    }

    if let Some(dir) = pattern.strip_suffix('/') {
        return path.is_dir() && to_posix(path).contains(dir);
    }

    if let Some(fragment) = pattern.strip_prefix("**") {
        let file_name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        return file_name.contains(fragment);
    }

    if let Some(fragment) = pattern.strip_prefix('*') {
        return to_posix(path).contains(fragment);
    }

    let segments = path_segments(path);
    match pattern.strip_suffix('*') {
        Some(prefix) => segments.iter().any(|segment| segment.contains(prefix)),
        None => segments.iter().any(|segment| segment == pattern),
    }
}
