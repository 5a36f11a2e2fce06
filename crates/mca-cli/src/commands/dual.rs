use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use mca_classification::DualContextComposer;
use mca_core::McaConfig;

use super::{print_json, read_input};

#[derive(Args)]
pub struct DualArgs {
    /// Transcript file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

pub fn execute(args: DualArgs, config: &McaConfig) -> Result<()> {
    let text = read_input(&args.file)?;
    let coding = DualContextComposer::with_config(config).code_dual_context(&text);
    print_json(&coding)
}
