//! llm-prompt-generator: turn a Python package into an LLM prompt
//!
//! This library scans a package for source files, extracts every function and
//! class definition with its docstring and source, and renders a flat text
//! prompt headed by the package name and description from `pyproject.toml`.

pub mod cli;
pub mod config;
pub mod domain;
pub mod extract;
pub mod manifest;
pub mod pipeline;
pub mod render;
pub mod scan;
pub mod utils;
