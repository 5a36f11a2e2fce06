use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;
use test_fixtures::fixture_path;

fn mca(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mca"))
        .args(args)
        .env_remove("MCA_CONFIG_PATH")
        .env_remove("RUST_LOG")
        .env("MCA_LOG_LEVEL", "warn")
        .output()
        .expect("failed to run mca")
}

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn code_reports_each_file() {
    let a = write_temp("");
    let b = write_temp("First, I break the task into steps. I always verify the sources.");
    let output = mca(&["code", a.path().to_str().unwrap(), b.path().to_str().unwrap()]);
    let reports = stdout_json(&output);
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["classification"]["pattern"], "F");
    assert_eq!(reports[0]["total_score"], 0);
    assert_eq!(reports[0]["content_hash"].as_str().unwrap().len(), 64);
    assert!(reports[1]["scores"]["p1"].as_u64().unwrap() > 0);
}

#[test]
fn missing_file_fails_with_context() {
    let output = mca(&["code", "/definitely/not/here.txt"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
}

#[test]
fn dual_codes_both_contexts() {
    let transcript = write_temp("I am writing my thesis research chapter.\nI always verify the citations.\n");
    let coding = stdout_json(&mca(&["dual", transcript.path().to_str().unwrap()]));
    assert!(coding.get("high_risk").is_some());
    assert!(coding.get("low_risk").is_some());
    assert!(coding.get("primary_pattern").is_some());
}

#[test]
fn replay_emits_one_line_per_turn() {
    let turns = write_temp("{\"reliance\":\"high\"}\n{\"reliance\":\"high\"}\n{\"reliance\":\"high\"}\n");
    let output = mca(&["replay", turns.path().to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let steps: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[2]["estimate"]["topPattern"], "F");
    assert_eq!(steps[2]["highRiskF"], true);
}

#[test]
fn evaluate_golden_records() {
    let path = fixture_path("golden/evaluation/labeled_scores.json");
    let report = stdout_json(&mca(&["evaluate", path.to_str().unwrap()]));
    assert_eq!(report["total"], 6);
    assert_eq!(report["correct"], 4);
}

#[test]
fn invalid_config_is_rejected() {
    let config = write_temp("[recognizer]\nf_prior = 2.0\n");
    let transcript = write_temp("hello");
    let output = mca(&[
        "--config",
        config.path().to_str().unwrap(),
        "code",
        transcript.path().to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid config file"));
}
