//! Prompt rendering.
//!
//! Both layouts start with the same package header. They differ in how
//! symbols are laid out after it.

use crate::domain::{PackageInfo, PairingMode, Symbol, SymbolListing};
use std::fmt::Write;

/// Render the prompt for `package` in the requested pairing mode.
pub fn render(package: &PackageInfo, symbols: &[Symbol], mode: PairingMode) -> String {
    match mode {
        PairingMode::Positional => {
            let listing: SymbolListing = symbols.iter().collect();
            render_prompt(&package.name, &package.description, &listing.names, &listing.descriptions)
        }
        PairingMode::Bound => render_bound(&package.name, &package.description, symbols),
    }
}

/// Historical layout: names and descriptions zipped by index.
///
/// Pairs stop at the shorter sequence; leftover descriptions are dropped.
pub fn render_prompt(
    package_name: &str,
    package_description: &str,
    names: &[String],
    descriptions: &[String],
) -> String {
    let mut prompt = header(package_name, package_description);
    for (name, description) in names.iter().zip(descriptions) {
        let _ = write!(prompt, "## Function: {name}\n\n{description}\n\n");
    }
    prompt
}

/// One section per symbol carrying its own docstring and source.
pub fn render_bound(package_name: &str, package_description: &str, symbols: &[Symbol]) -> String {
    let mut prompt = header(package_name, package_description);
    for symbol in symbols {
        let _ = write!(prompt, "## {}: {}\n\n", symbol.kind, symbol.name);
        if let Some(doc) = &symbol.docstring {
            let _ = write!(prompt, "{doc}\n\n");
        }
        let _ = write!(prompt, "{}\n\n", symbol.source);
    }
    prompt
}

fn header(package_name: &str, package_description: &str) -> String {
    format!("# Package: {package_name}\n\n{package_description}\n\n")
}
