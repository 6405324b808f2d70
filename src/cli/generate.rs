//! Prompt generation command

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{normalize_extensions, PairingMode};
use crate::pipeline::{generate_prompt, TracingReporter};

#[derive(Args)]
pub struct GenerateArgs {
    /// Root directory of the Python package
    #[arg(value_name = "ROOT_DIR")]
    pub root_dir: PathBuf,

    /// File the prompt is written to [default: prompt.txt]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to config file (defaults to ./llm-prompt.toml when present)
    #[arg(short = 'c', long, value_name = "FILE", env = "LLM_PROMPT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Source extensions to scan (comma-separated, e.g. '.py,.pyi')
    #[arg(short = 'i', long, value_name = "EXTS")]
    pub include_ext: Option<String>,

    /// Follow symbolic links when scanning
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Encoding tried before falling back to UTF-8 (e.g. 'latin1')
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Also extract `async def` functions
    #[arg(long)]
    pub include_async: bool,

    /// How descriptions pair with names: 'positional' or 'bound'
    #[arg(long, value_name = "MODE")]
    pub pairing: Option<String>,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let start_time = Instant::now();
    let context_dir = std::env::current_dir().context("Cannot determine working directory")?;

    let file_config = load_config(&context_dir, args.config.as_deref())?;
    let pairing = args.pairing.as_deref().map(parse_pairing).transpose()?;

    let cli_overrides = CliOverrides {
        root_dir: Some(args.root_dir.clone()),
        output: args.output.clone(),
        extensions: args.include_ext.as_deref().map(|raw| normalize_extensions(raw.split(','))),
        follow_symlinks: if args.follow_symlinks { Some(true) } else { None },
        encoding: args.encoding.clone(),
        include_async: if args.include_async { Some(true) } else { None },
        pairing,
    };
    let config = merge_cli_with_config(file_config, cli_overrides);

    if let Some(root_dir) = config.root_dir.as_deref() {
        if !root_dir.is_dir() {
            anyhow::bail!("Root directory does not exist: {}", root_dir.display());
        }
    }

    let prompt = generate_prompt(&config, &context_dir, &TracingReporter)?;

    fs::write(&config.output, &prompt)
        .with_context(|| format!("Failed to write prompt to {}", config.output.display()))?;
    debug!(
        output = %config.output.display(),
        bytes = prompt.len(),
        pairing = config.pairing.as_str(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "prompt written"
    );
    Ok(())
}

fn parse_pairing(value: &str) -> Result<PairingMode> {
    match value.to_lowercase().as_str() {
        "positional" => Ok(PairingMode::Positional),
        "bound" => Ok(PairingMode::Bound),
        other => anyhow::bail!("Invalid pairing mode: {other} (expected 'positional' or 'bound')"),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_pairing;
    use crate::domain::PairingMode;

    #[test]
    fn pairing_names_are_case_insensitive() {
        assert_eq!(parse_pairing("Bound").expect("bound"), PairingMode::Bound);
        assert_eq!(parse_pairing("positional").expect("positional"), PairingMode::Positional);
        assert!(parse_pairing("zip").is_err());
    }
}
