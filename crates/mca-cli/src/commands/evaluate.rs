use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;
use std::path::PathBuf;

use mca_classification::{evaluate, LabeledScores, PatternClassifier};

use super::{print_json, read_input};

#[derive(Args)]
pub struct EvaluateArgs {
    /// JSON file of labeled score vectors
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Either a bare array of records or an object carrying them under `records`.
#[derive(Deserialize)]
#[serde(untagged)]
enum LabeledInput {
    Bare(Vec<LabeledScores>),
    Wrapped { records: Vec<LabeledScores> },
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let raw = read_input(&args.file)?;
    let records = parse_records(&raw)
        .with_context(|| format!("Invalid labeled records in {}", args.file.display()))?;

    let report = evaluate(&PatternClassifier::new(), &records);
    tracing::info!(
        total = report.total,
        accuracy = report.accuracy,
        passive_recall = report.passive_recall(),
        "evaluation complete"
    );
    print_json(&report)
}

fn parse_records(raw: &str) -> Result<Vec<LabeledScores>> {
    let input: LabeledInput = serde_json::from_str(raw)?;
    Ok(match input {
        LabeledInput::Bare(records) | LabeledInput::Wrapped { records } => records,
    })
}
