//! Path rendering helpers used by ignore matching.

use std::path::{Component, Path};

/// Slash-separated form of a path, regardless of platform separator.
pub fn to_posix(path: &Path) -> String {
    let raw = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        raw.into_owned()
    } else {
        raw.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Names of every ancestor directory followed by the file name.
///
/// Root, prefix and `.` components carry no name and are skipped; `..` is
/// kept verbatim.
pub fn path_segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect()
}
