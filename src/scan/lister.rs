//! Candidate file discovery.

use super::pattern::matches;
use crate::domain::{default_extensions, default_ignore_files, Config, GeneratorError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Knobs for the directory walk.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Dot-prefixed extensions a file must carry to become a candidate
    pub extensions: Vec<String>,
    /// Ignore files read from the root directory, in order
    pub ignore_files: Vec<String>,
    pub follow_symlinks: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore_files: default_ignore_files(),
            follow_symlinks: false,
        }
    }
}

impl From<&Config> for ListOptions {
    fn from(config: &Config) -> Self {
        Self {
            extensions: config.extensions.clone(),
            ignore_files: config.ignore_files.clone(),
            follow_symlinks: config.follow_symlinks,
        }
    }
}

/// Walk `root_dir` and return the source files left after ignore filtering.
///
/// A symlink to a file is listed under its own path. Entries are visited in file-name order within each directory; the result
/// keeps that order.
pub fn list_candidates(root_dir: &Path, options: &ListOptions) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();
    let walker =
        WalkDir::new(root_dir).follow_links(options.follow_symlinks).sort_by_file_name();

    for entry in walker {
        let entry = entry
            .map_err(|source| GeneratorError::Walk { path: root_dir.to_path_buf(), source })?;
        if !is_regular_file(&entry) {
            continue;
        }
        if has_extension(entry.path(), &options.extensions) {
            candidates.push(entry.into_path());
        }
    }

    let patterns = load_ignore_patterns(root_dir, &options.ignore_files)?;
    debug!(
        candidates = candidates.len(),
        patterns = patterns.len(),
        "applying ignore patterns"
    );
    Ok(apply_ignore_patterns(candidates, &patterns))
}

/// Symlinked files count by their target. Symlinked directories are only
/// descended when `follow_symlinks` is set.
fn is_regular_file(entry: &walkdir::DirEntry) -> bool {
    if entry.path_is_symlink() {
        entry.path().is_file()
    } else {
        entry.file_type().is_file()
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension() else {
        return false;
    };
    let ext = ext.to_string_lossy();
    extensions.iter().any(|wanted| wanted.strip_prefix('.').unwrap_or(wanted) == ext)
}

/// Read every ignore file in `root_dir`, concatenating their lines in order.
///
/// A missing ignore file contributes nothing.
pub fn load_ignore_patterns(root_dir: &Path, ignore_files: &[String]) -> Result<Vec<String>> {
    let mut patterns = Vec::new();
    for name in ignore_files {
        let path = root_dir.join(name);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(file = %path.display(), "loaded ignore file");
                patterns.extend(content.lines().map(str::to_string));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(GeneratorError::io(path, e)),
        }
    }
    Ok(patterns)
}

/// Filter `candidates` through each pattern in turn.
pub fn apply_ignore_patterns(mut candidates: Vec<PathBuf>, patterns: &[String]) -> Vec<PathBuf> {
    for pattern in patterns {
        candidates.retain(|path| !matches(pattern, path));
    }
    candidates
}
