use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use mca_context::ContextFilter;
use mca_core::{McaConfig, RiskClass};

use super::read_input;

#[derive(Args)]
pub struct FilterArgs {
    /// Transcript file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Risk class to keep (high or low)
    #[arg(long, value_parser = parse_risk_class)]
    pub risk: RiskClass,

    /// Override the context window (lines kept on each side of a match)
    #[arg(long)]
    pub window: Option<usize>,
}

pub fn execute(args: FilterArgs, config: &McaConfig) -> Result<()> {
    let text = read_input(&args.file)?;
    let filter = match args.window {
        Some(window) => ContextFilter::with_window(window),
        None => ContextFilter::with_config(&config.context),
    };
    let excerpt = filter.filter_by_risk(&text, args.risk);
    if excerpt.is_empty() {
        tracing::warn!(risk = %args.risk, "no matching lines");
    } else {
        println!("{excerpt}");
    }
    Ok(())
}

fn parse_risk_class(raw: &str) -> Result<RiskClass, String> {
    raw.parse::<RiskClass>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_class_parses_case_insensitively() {
        assert_eq!(parse_risk_class("HIGH"), Ok(RiskClass::High));
        assert_eq!(parse_risk_class("low"), Ok(RiskClass::Low));
        assert!(parse_risk_class("medium").is_err());
    }
}
