//! llm-prompt-generator: turn a Python package into an LLM prompt
//!
//! Scans a package directory, extracts functions and classes with their
//! docstrings, and writes a prompt file for large language model context.

use anyhow::Result;

fn main() -> Result<()> {
    llm_prompt_generator::cli::run()
}
