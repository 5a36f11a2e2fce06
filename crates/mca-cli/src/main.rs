//! # mca
//!
//! Command-line front end for the pattern classification engine.
//!
//! - `mca code <FILE>...`: batch-code transcripts
//! - `mca dual <FILE>`: code high- and low-risk excerpts separately
//! - `mca filter <FILE> --risk <high|low>`: print one risk excerpt
//! - `mca replay <FILE>`: feed turns through the online recognizer
//! - `mca evaluate <FILE>`: compare the classifier against expert labels
//!
//! Results go to stdout as JSON; logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use mca_core::McaConfig;

mod commands;

use commands::{CodeArgs, DualArgs, EvaluateArgs, FilterArgs, ReplayArgs};

/// Metacognitive collaboration pattern analysis
#[derive(Parser)]
#[command(name = "mca")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "MCA_CONFIG_PATH", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "MCA_LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score and classify whole transcripts
    Code(CodeArgs),
    /// Code the high- and low-risk excerpts of one transcript
    Dual(DualArgs),
    /// Print the excerpt of a transcript that matches one risk class
    Filter(FilterArgs),
    /// Replay a session through the online recognizer
    Replay(ReplayArgs),
    /// Evaluate the classifier against labeled score vectors
    Evaluate(EvaluateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level)?;
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Code(args) => commands::code::execute(args, &config),
        Commands::Dual(args) => commands::dual::execute(args, &config),
        Commands::Filter(args) => commands::filter::execute(args, &config),
        Commands::Replay(args) => commands::replay::execute(args, &config),
        Commands::Evaluate(args) => commands::evaluate::execute(args),
    }
}

/// Initialize tracing subscriber for logging. `RUST_LOG` wins over `--log-level`.
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<McaConfig> {
    let Some(path) = path else {
        return Ok(McaConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = McaConfig::from_toml(&raw)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}
