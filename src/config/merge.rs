//! CLI argument merging with config

use crate::domain::{Config, PairingMode};
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub root_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub extensions: Option<Vec<String>>,
    pub follow_symlinks: Option<bool>,
    pub encoding: Option<String>,
    pub include_async: Option<bool>,
    pub pairing: Option<PairingMode>,
}

pub fn merge_cli_with_config(mut base_config: Config, cli: CliOverrides) -> Config {
    if let Some(root_dir) = cli.root_dir {
        base_config.root_dir = Some(root_dir);
    }
    if let Some(output) = cli.output {
        base_config.output = output;
    }

    if let Some(extensions) = cli.extensions {
        base_config.extensions = extensions;
    }
    if let Some(follow_symlinks) = cli.follow_symlinks {
        base_config.follow_symlinks = follow_symlinks;
    }

    if let Some(encoding) = cli.encoding {
        base_config.encoding = encoding;
    }
    if let Some(include_async) = cli.include_async {
        base_config.include_async = include_async;
    }

    if let Some(pairing) = cli.pairing {
        base_config.pairing = pairing;
    }

    base_config
}

#[cfg(test)]
mod tests {
    use super::{merge_cli_with_config, CliOverrides};
    use crate::domain::{Config, PairingMode};
    use std::path::PathBuf;

    #[test]
    fn cli_overrides_replace_base_values() {
        let base = Config {
            root_dir: Some(PathBuf::from("/tmp/pkg")),
            output: PathBuf::from("from-config.txt"),
            encoding: "latin1".to_string(),
            ..Config::default()
        };

        let cli = CliOverrides {
            root_dir: Some(PathBuf::from("src")),
            pairing: Some(PairingMode::Bound),
            extensions: Some(vec![".pyi".to_string()]),
            include_async: Some(true),
            ..CliOverrides::default()
        };

        let merged = merge_cli_with_config(base, cli);
        assert_eq!(merged.root_dir.as_deref(), Some(std::path::Path::new("src")));
        assert_eq!(merged.pairing, PairingMode::Bound);
        assert_eq!(merged.extensions, vec![".pyi"]);
        assert!(merged.include_async);
        // Untouched fields keep their config values.
        assert_eq!(merged.output, PathBuf::from("from-config.txt"));
        assert_eq!(merged.encoding, "latin1");
    }
}
