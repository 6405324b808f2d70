//! Error types shared by every stage of prompt generation.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a generation run.
///
/// There is no per-file isolation: the first error stops the batch and no
/// output is written.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(
        "{} not found or missing name/description. Please run the tool from the root directory of the Python package.",
        path.display()
    )]
    ManifestNotFound { path: PathBuf },

    #[error("failed to parse manifest {}: {message}", path.display())]
    ManifestParse { path: PathBuf, message: String },

    #[error("could not decode {} as {encoding} or utf-8", path.display())]
    Decode { path: PathBuf, encoding: String },

    #[error("syntax error in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("unknown encoding label: {0}")]
    UnknownEncoding(String),

    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GeneratorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

/// Convenience alias for results using `GeneratorError`.
pub type Result<T> = std::result::Result<T, GeneratorError>;
