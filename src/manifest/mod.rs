//! Package metadata from `pyproject.toml`.

use crate::domain::{Config, GeneratorError, PackageInfo, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Which manifest to read and which `[tool.*]` table holds the metadata.
#[derive(Debug, Clone)]
pub struct ManifestSettings {
    pub file_name: String,
    pub tool_table: String,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self { file_name: "pyproject.toml".to_string(), tool_table: "poetry".to_string() }
    }
}

impl From<&Config> for ManifestSettings {
    fn from(config: &Config) -> Self {
        Self { file_name: config.manifest_file.clone(), tool_table: config.manifest_table.clone() }
    }
}

/// Load `name` and `description` from `[tool.<table>]` of the manifest in
/// `context_dir`.
///
/// `context_dir` is the directory the tool was started from, not the package
/// root being scanned. A missing file and missing keys are the same error.
pub fn load_package_info(context_dir: &Path, settings: &ManifestSettings) -> Result<PackageInfo> {
    let path = context_dir.join(&settings.file_name);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(GeneratorError::ManifestNotFound { path });
        }
        Err(e) => return Err(GeneratorError::io(path, e)),
    };

    let value: toml::Value = toml::from_str(&content).map_err(|e| {
        GeneratorError::ManifestParse { path: path.clone(), message: e.message().to_string() }
    })?;

    let table = value.get("tool").and_then(|tool| tool.get(&settings.tool_table));
    let field = |key: &str| -> Result<String> {
        table
            .and_then(|t| t.get(key))
            .and_then(toml::Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| GeneratorError::ManifestNotFound { path: path.clone() })
    };

    let info = PackageInfo { name: field("name")?, description: field("description")? };
    debug!(manifest = %path.display(), package = %info.name, "loaded package info");
    Ok(info)
}
