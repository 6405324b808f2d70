//! Configuration file discovery and loading.

mod merge;

pub use merge::{merge_cli_with_config, CliOverrides};

use crate::domain::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file looked up in the anchor directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "llm-prompt.toml";

/// Load the run configuration.
///
/// An explicit path must exist. Without one, `llm-prompt.toml` in `anchor`
/// is used if present, otherwise the built-in defaults.
pub fn load_config(anchor: &Path, explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => match discover_config(anchor) {
            Some(path) => path,
            None => return Ok(Config::default()),
        },
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    debug!(config = %path.display(), "loaded config file");
    Ok(config)
}

fn discover_config(anchor: &Path) -> Option<PathBuf> {
    let candidate = anchor.join(DEFAULT_CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PairingMode;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_config_file_exists() {
        let tmp = TempDir::new().expect("tmp");
        let config = load_config(tmp.path(), None).expect("load");
        assert_eq!(config.output, PathBuf::from("prompt.txt"));
        assert_eq!(config.extensions, vec![".py"]);
    }

    #[test]
    fn discovers_config_in_anchor_directory() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(
            tmp.path().join(DEFAULT_CONFIG_FILE),
            "output = \"llm.txt\"\npairing = \"bound\"\nignore_files = [\".gptignore\"]\n",
        )
        .expect("write");

        let config = load_config(tmp.path(), None).expect("load");
        assert_eq!(config.output, PathBuf::from("llm.txt"));
        assert_eq!(config.pairing, PairingMode::Bound);
        assert_eq!(config.ignore_files, vec![".gptignore"]);
    }

    #[test]
    fn explicit_config_must_exist() {
        let tmp = TempDir::new().expect("tmp");
        let missing = tmp.path().join("absent.toml");
        let err = load_config(tmp.path(), Some(&missing)).expect_err("fail");
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn invalid_config_reports_the_file() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "pairing = \"sideways\"\n").expect("write");

        let err = load_config(tmp.path(), Some(&path)).expect_err("fail");
        assert!(err.to_string().contains("Invalid config file"));
    }
}
