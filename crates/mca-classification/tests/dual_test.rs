use mca_classification::DualContextComposer;
use mca_core::{McaConfig, RiskClass};
use proptest::prelude::*;

fn filler(n: usize) -> String {
    (0..n)
        .map(|i| format!("We talked about the weather, item {i}."))
        .collect::<Vec<_>>()
        .join("\n")
}

fn two_context_transcript() -> String {
    format!(
        "For my thesis I always cross-check every citation against the original paper.\n\
         I break the thesis into chapters and set a deadline for each one.\n\
         {}\n\
         For emails I just copy the answer, it looks fine to me.",
        filler(25)
    )
}

fn composer_with_min_chars(min_primary_chars: usize) -> DualContextComposer {
    let mut config = McaConfig::default();
    config.context.min_primary_chars = min_primary_chars;
    DualContextComposer::with_config(&config)
}

#[test]
fn long_high_risk_excerpt_is_primary() {
    let coding = DualContextComposer::new().code_dual_context(&two_context_transcript());
    assert!(coding.high_risk.filtered_chars() >= 200);
    assert_eq!(coding.primary_source, RiskClass::High);
    assert_eq!(coding.primary_pattern, coding.high_risk.pattern());
    assert_eq!(coding.primary_score, coding.high_risk.total_score);
    assert_eq!(coding.high_risk.scores.quality_checking.value(), 3);
    assert_eq!(coding.low_risk.scores.quality_checking.value(), 0);
    assert!(!coding.low_risk.filtered_text.contains("thesis"));
    assert!(!coding.high_risk.filtered_text.contains("emails"));
}

#[test]
fn short_high_risk_excerpt_falls_back_to_low() {
    let coding = DualContextComposer::new().code_dual_context("My thesis.\nFormat my email.");
    assert!(coding.high_risk.filtered_chars() < 200);
    assert_eq!(coding.primary_source, RiskClass::Low);
    assert_eq!(coding.primary_pattern, coding.low_risk.pattern());
    assert_eq!(coding.primary_confidence, coding.low_risk.classification.confidence);
}

#[test]
fn threshold_is_inclusive() {
    let text = "My thesis.";
    assert_eq!(composer_with_min_chars(10).code_dual_context(text).primary_source, RiskClass::High);
    assert_eq!(composer_with_min_chars(11).code_dual_context(text).primary_source, RiskClass::Low);
}

#[test]
fn empty_transcript_codes_as_passive_on_both_sides() {
    let coding = DualContextComposer::new().code_dual_context("");
    assert_eq!(coding.high_risk.word_count, 0);
    assert_eq!(coding.low_risk.total_score, 0);
    assert_eq!(coding.primary_pattern, mca_core::Pattern::F);
    assert!(!coding.is_context_dependent());
}

#[test]
fn word_count_counts_cjk_ideographs() {
    let coding = DualContextComposer::new().code_risk_context("我写论文", RiskClass::High);
    assert_eq!(coding.filtered_text, "我写论文");
    assert_eq!(coding.word_count, 4);
}

#[test]
fn code_many_preserves_input_order() {
    let texts = vec![two_context_transcript(), String::new(), "My thesis.".to_string()];
    let composer = DualContextComposer::new();
    let codings = composer.code_many(&texts);
    assert_eq!(codings.len(), 3);
    for (text, coding) in texts.iter().zip(&codings) {
        assert_eq!(coding, &composer.code_dual_context(text));
    }
}

proptest! {
    #[test]
    fn primary_follows_high_risk_length(text in "(?:[a-z ]{0,30}|my thesis|format email)(?:\n(?:[a-z ]{0,30}|my thesis|format email)){0,30}") {
        let coding = DualContextComposer::new().code_dual_context(&text);
        let expected = if coding.high_risk.filtered_text.chars().count() >= 200 {
            &coding.high_risk
        } else {
            &coding.low_risk
        };
        prop_assert_eq!(coding.primary_pattern, expected.classification.pattern);
        prop_assert_eq!(coding.primary_score, expected.total_score);
        prop_assert_eq!(coding.primary_source, expected.risk_class);
    }
}
