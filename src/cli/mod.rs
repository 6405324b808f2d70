//! Command-line interface for llm-prompt-generator

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod generate;

/// Turn a Python package into an LLM prompt of its functions and classes
#[derive(Parser)]
#[command(name = "llm-prompt-generator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    args: generate::GenerateArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stdout).with_target(false))
        .with(filter)
        .try_init();

    generate::run(cli.args)
}
