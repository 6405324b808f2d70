//! Utility functions

pub mod encoding;
pub mod paths;

pub use encoding::{normalize_newlines, read_source};
pub use paths::{path_segments, to_posix};
