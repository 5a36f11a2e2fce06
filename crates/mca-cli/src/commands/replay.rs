use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use mca_core::config::RecognizerConfig;
use mca_core::{McaConfig, PatternEstimate};
use mca_extraction::FeatureExtractor;
use mca_realtime::{OnlinePatternRecognizer, SignalDetector, TurnSignals};

use super::read_input;

#[derive(Args)]
pub struct ReplayArgs {
    /// JSON-lines file, one turn per line
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Treat each line as a raw participant message instead of turn signals
    #[arg(long)]
    pub text: bool,
}

/// Recognizer state after one replayed turn.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayStep {
    pub turn: u32,
    pub signals: TurnSignals,
    pub high_risk_f: bool,
    pub estimate: PatternEstimate,
}

pub fn execute(args: ReplayArgs, config: &McaConfig) -> Result<()> {
    let raw = read_input(&args.file)?;
    let turns = if args.text {
        let detector =
            SignalDetector::with_extractor(FeatureExtractor::with_config(&config.extraction));
        detect_turns(&raw, &detector)
    } else {
        parse_turns(&raw)
            .with_context(|| format!("Invalid turn signals in {}", args.file.display()))?
    };

    for step in replay(&turns, &config.recognizer)? {
        if step.high_risk_f {
            tracing::warn!(
                turn = step.turn,
                probability = step.estimate.probability_of(mca_core::Pattern::F),
                "high-risk passive reliance"
            );
        }
        let line = serde_json::to_string(&step).context("Failed to serialize replay step")?;
        println!("{line}");
    }
    Ok(())
}

/// Feed turns through a fresh recognizer, one step per turn.
pub fn replay(turns: &[TurnSignals], config: &RecognizerConfig) -> Result<Vec<ReplayStep>> {
    let mut recognizer = OnlinePatternRecognizer::with_config(config.clone())?;
    Ok(turns
        .iter()
        .map(|signals| {
            let estimate = recognizer.update(signals);
            ReplayStep {
                turn: estimate.turn_count,
                signals: *signals,
                high_risk_f: recognizer.is_high_risk_f(signals),
                estimate,
            }
        })
        .collect())
}

fn parse_turns(raw: &str) -> Result<Vec<TurnSignals>> {
    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("line {}", i + 1))
        })
        .collect()
}

fn detect_turns(raw: &str, detector: &SignalDetector) -> Vec<TurnSignals> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| detector.detect(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mca_core::Pattern;
    use mca_realtime::RelianceLevel;

    #[test]
    fn parses_json_lines_skipping_blanks() {
        let raw = "{\"reliance\":\"high\"}\n\n{\"verification\":\"strong\"}\n";
        let turns = parse_turns(raw).unwrap();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0], TurnSignals::passive());
    }

    #[test]
    fn reports_the_bad_line() {
        let err = parse_turns("{}\n{\"reliance\":\"extreme\"}").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"), "{err:#}");
    }

    #[test]
    fn passive_replay_flags_high_risk() {
        let turns = vec![TurnSignals::passive(); 4];
        let steps = replay(&turns, &RecognizerConfig::default()).unwrap();
        assert_eq!(steps.len(), 4);
        assert!(!steps[0].high_risk_f);
        assert!(steps[3].high_risk_f);
        assert_eq!(steps[3].estimate.top_pattern, Pattern::F);
        assert_eq!(steps[3].turn, 4);
    }

    #[test]
    fn text_mode_detects_each_message() {
        let turns = detect_turns(
            "Just do it for me.\n\n   \nI will check the numbers myself.\n",
            &SignalDetector::new(),
        );
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].reliance, RelianceLevel::High);
        assert_eq!(turns[1].reliance, RelianceLevel::Low);
    }
}
