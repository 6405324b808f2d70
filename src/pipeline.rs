//! End-to-end prompt generation.

use crate::domain::{Config, Result, Symbol};
use crate::extract::{extract_file, ExtractOptions};
use crate::manifest::{load_package_info, ManifestSettings};
use crate::render::render;
use crate::scan::{list_candidates, ListOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Sink for progress events emitted while a run is underway.
pub trait Reporter {
    fn files_discovered(&self, root: &Path, count: usize);

    fn file_extracted(&self, _path: &Path, _symbols: usize) {}
}

/// Forwards progress to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn files_discovered(&self, root: &Path, count: usize) {
        debug!(root = %root.display(), "scan complete");
        info!("Found {count} Python files.");
    }

    fn file_extracted(&self, path: &Path, symbols: usize) {
        debug!(path = %path.display(), symbols, "extracted symbols");
    }
}

/// Build the prompt for `config.root_dir`.
///
/// The manifest is read from `context_dir` before any source file is
/// touched. Any error aborts the whole run.
pub fn generate_prompt(
    config: &Config,
    context_dir: &Path,
    reporter: &dyn Reporter,
) -> Result<String> {
    let package = load_package_info(context_dir, &ManifestSettings::from(config))?;
    let extract_options = ExtractOptions::from_config(config)?;

    let root_dir = config.root_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let files = list_candidates(&root_dir, &ListOptions::from(config))?;
    reporter.files_discovered(&root_dir, files.len());

    let symbols = collect_symbols(&files, &extract_options, reporter)?;
    Ok(render(&package, &symbols, config.pairing))
}

fn collect_symbols(
    files: &[PathBuf],
    options: &ExtractOptions,
    reporter: &dyn Reporter,
) -> Result<Vec<Symbol>> {
    let mut symbols = Vec::new();
    for path in files {
        let file_symbols = extract_file(path, options)?;
        reporter.file_extracted(path, file_symbols.len());
        symbols.extend(file_symbols);
    }
    Ok(symbols)
}
