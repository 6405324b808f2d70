//! Core domain types and models
//!
//! Defines the run configuration, the extracted `Symbol` record, the legacy
//! flat `SymbolListing` and the package metadata read from the manifest.

pub mod errors;

pub use errors::{GeneratorError, Result};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// How extracted symbols are paired with their descriptions when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PairingMode {
    /// Zip the flat name and description sequences by index, truncating to
    /// the shorter one. Symbols after the first documented one drift out of
    /// alignment; this is the historical output format.
    #[default]
    Positional,
    /// Render each symbol with its own docstring and source.
    Bound,
}

impl PairingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positional => "positional",
            Self::Bound => "bound",
        }
    }
}

/// Kind of definition a symbol was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Function,
    Class,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function => f.write_str("Function"),
            Self::Class => f.write_str("Class"),
        }
    }
}

/// A function or class definition found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Identifier of the definition
    pub name: String,

    pub kind: SymbolKind,

    /// Cleaned docstring, when the body opens with a plain string literal
    #[serde(default)]
    pub docstring: Option<String>,

    /// Full source text of the definition, decorators included, dedented to
    /// column zero
    pub source: String,
}

/// Flat name/description sequences as consumed by positional rendering.
///
/// Every symbol contributes one name but one or two descriptions (docstring
/// when present, then source), so the two sequences only line up while every
/// symbol is undocumented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolListing {
    pub names: Vec<String>,
    pub descriptions: Vec<String>,
}

impl SymbolListing {
    pub fn push(&mut self, symbol: &Symbol) {
        self.names.push(symbol.name.clone());
        if let Some(doc) = &symbol.docstring {
            self.descriptions.push(doc.clone());
        }
        self.descriptions.push(symbol.source.clone());
    }
}

impl<'a> FromIterator<&'a Symbol> for SymbolListing {
    fn from_iter<I: IntoIterator<Item = &'a Symbol>>(iter: I) -> Self {
        let mut listing = SymbolListing::default();
        for symbol in iter {
            listing.push(symbol);
        }
        listing
    }
}

/// Package name and description from the project manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    pub description: String,
}

/// Custom deserializer for extensions: normalizes to dot-prefixed format.
///
/// Accepts a comma-separated string or an array. Order is kept and duplicates
/// are dropped.
fn deserialize_extensions<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct ExtensionsVisitor;

    impl<'de> Visitor<'de> for ExtensionsVisitor {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or array of extensions")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(normalize_extensions(value.split(',')))
        }

        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut raw = Vec::new();
            while let Some(ext) = seq.next_element::<String>()? {
                raw.push(ext);
            }
            Ok(normalize_extensions(raw.iter().map(String::as_str)))
        }
    }

    deserializer.deserialize_any(ExtensionsVisitor)
}

/// Trim, add a leading dot where missing and drop empties and duplicates.
pub fn normalize_extensions<'a>(raw: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for ext in raw {
        let trimmed = ext.trim();
        if trimmed.is_empty() {
            continue;
        }
        let normalized =
            if trimmed.starts_with('.') { trimmed.to_string() } else { format!(".{trimmed}") };
        if !result.contains(&normalized) {
            result.push(normalized);
        }
    }
    result
}

/// Main configuration for a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory of the Python package to scan
    #[serde(default, alias = "root")]
    pub root_dir: Option<PathBuf>,

    /// File the rendered prompt is written to
    #[serde(default = "default_output")]
    pub output: PathBuf,

    // Discovery options
    #[serde(
        default = "default_extensions",
        alias = "include_ext",
        deserialize_with = "deserialize_extensions"
    )]
    pub extensions: Vec<String>,

    /// Ignore files read from the root directory, in order
    #[serde(default = "default_ignore_files")]
    pub ignore_files: Vec<String>,

    #[serde(default)]
    pub follow_symlinks: bool,

    // Manifest options
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    /// Table under `[tool]` holding `name` and `description`
    #[serde(default = "default_manifest_table")]
    pub manifest_table: String,

    // Extraction options
    /// `encoding_rs` label tried before falling back to UTF-8
    #[serde(default = "default_encoding")]
    pub encoding: String,

    #[serde(default)]
    pub include_async: bool,

    // Output options
    #[serde(default)]
    pub pairing: PairingMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: None,
            output: default_output(),
            extensions: default_extensions(),
            ignore_files: default_ignore_files(),
            follow_symlinks: false,
            manifest_file: default_manifest_file(),
            manifest_table: default_manifest_table(),
            encoding: default_encoding(),
            include_async: false,
            pairing: PairingMode::Positional,
        }
    }
}

// Default value functions for serde
fn default_output() -> PathBuf {
    PathBuf::from("prompt.txt")
}

pub fn default_extensions() -> Vec<String> {
    vec![".py".to_string()]
}

pub fn default_ignore_files() -> Vec<String> {
    vec![".gitignore".to_string(), ".gptignore".to_string()]
}

fn default_manifest_file() -> String {
    "pyproject.toml".to_string()
}

fn default_manifest_table() -> String {
    "poetry".to_string()
}

fn default_encoding() -> String {
    "utf-8".to_string()
}
