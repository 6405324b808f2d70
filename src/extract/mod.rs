//! Symbol extraction from Python source files.

pub mod docstring;
pub mod python;

pub use python::PythonExtractor;

use crate::domain::{Config, Result, Symbol, SymbolListing};
use crate::utils::encoding::resolve_encoding;
use crate::utils::read_source;
use encoding_rs::{Encoding, UTF_8};
use std::path::Path;

/// Settings for reading and parsing one file.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    /// Encoding tried before the UTF-8 fallback
    pub encoding: &'static Encoding,
    /// Extract `async def` functions too
    pub include_async: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { encoding: UTF_8, include_async: false }
    }
}

impl ExtractOptions {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            encoding: resolve_encoding(&config.encoding)?,
            include_async: config.include_async,
        })
    }
}

/// Read and parse `path`, returning its definitions in visit order.
pub fn extract_file(path: &Path, options: &ExtractOptions) -> Result<Vec<Symbol>> {
    let source = read_source(path, options.encoding)?;
    parse_symbols(&source, path, options)
}

/// Parse already-decoded `source`; `path` only labels errors.
pub fn parse_symbols(source: &str, path: &Path, options: &ExtractOptions) -> Result<Vec<Symbol>> {
    PythonExtractor::new(options.include_async).extract(source, path)
}

/// Flat names and descriptions for one file.
///
/// Each symbol adds one name, plus its docstring (when present) and its
/// source to the descriptions.
pub fn extract_symbols(path: &Path, options: &ExtractOptions) -> Result<SymbolListing> {
    let symbols = extract_file(path, options)?;
    Ok(symbols.iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeneratorError;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("write");
        path
    }

    #[test]
    fn undocumented_function_yields_one_description() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "a.py", b"def bare():\n    pass\n");

        let listing = extract_symbols(&path, &ExtractOptions::default()).expect("extract");
        assert_eq!(listing.names, vec!["bare"]);
        assert_eq!(listing.descriptions, vec!["def bare():\n    pass"]);
    }

    #[test]
    fn documented_function_yields_doc_then_source() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "a.py", b"def greet():\n    \"\"\"Says hello.\"\"\"\n    pass\n");

        let listing = extract_symbols(&path, &ExtractOptions::default()).expect("extract");
        assert_eq!(listing.names, vec!["greet"]);
        assert_eq!(
            listing.descriptions,
            vec!["Says hello.", "def greet():\n    \"\"\"Says hello.\"\"\"\n    pass"]
        );
    }

    #[test]
    fn methods_are_listed_alongside_their_class() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(
            &tmp,
            "shapes.py",
            b"class Shape:\n    \"\"\"A shape.\"\"\"\n\n    def area(self):\n        return 0\n",
        );

        let listing = extract_symbols(&path, &ExtractOptions::default()).expect("extract");
        assert_eq!(listing.names, vec!["Shape", "area"]);
        assert_eq!(listing.descriptions.len(), 3);
        assert_eq!(listing.descriptions[0], "A shape.");
        assert!(listing.descriptions[1].starts_with("class Shape:"));
        assert_eq!(listing.descriptions[2], "def area(self):\n    return 0");
    }

    #[test]
    fn crlf_sources_are_normalized_before_parsing() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "win.py", b"def f():\r\n    'Doc.'\r\n    return 1\r\n");

        let symbols = extract_file(&path, &ExtractOptions::default()).expect("extract");
        assert_eq!(symbols[0].docstring.as_deref(), Some("Doc."));
        assert_eq!(symbols[0].source, "def f():\n    'Doc.'\n    return 1");
    }

    #[test]
    fn decode_failure_aborts_extraction() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "bin.py", b"x = '\xff'\n");

        let err = extract_symbols(&path, &ExtractOptions::default()).expect_err("must fail");
        assert!(matches!(err, GeneratorError::Decode { .. }));
    }

    #[test]
    fn options_resolve_the_configured_encoding() {
        let config = Config { encoding: "latin1".to_string(), ..Config::default() };
        let options = ExtractOptions::from_config(&config).expect("options");
        assert_eq!(options.encoding, encoding_rs::WINDOWS_1252);

        let bad = Config { encoding: "nope".to_string(), ..Config::default() };
        assert!(matches!(
            ExtractOptions::from_config(&bad),
            Err(GeneratorError::UnknownEncoding(_))
        ));
    }
}
