//! Source discovery: directory walk plus ignore-file filtering.

pub mod lister;
pub mod pattern;

pub use lister::{
    apply_ignore_patterns, list_candidates, load_ignore_patterns, ListOptions,
};
pub use pattern::matches;
