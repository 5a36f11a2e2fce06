//! Subcommand implementations.
//!
//! Each command splits into a pure function that builds the report and an
//! `execute` wrapper that does the file I/O and printing.

pub mod code;
pub mod dual;
pub mod evaluate;
pub mod filter;
pub mod replay;

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

pub use code::CodeArgs;
pub use dual::DualArgs;
pub use evaluate::EvaluateArgs;
pub use filter::FilterArgs;
pub use replay::ReplayArgs;

pub(crate) fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}
