//! Rule-table behavior on golden vectors and over the whole score space.

use mca_classification::rules::{all_rules, strongest_pairing};
use mca_classification::PatternClassifier;
use mca_core::traits::IPatternClassifier;
use mca_core::{BatchConfidence, Pattern, SubprocessScores};
use proptest::prelude::*;
use test_fixtures::load_fixture_value;

#[test]
fn golden_rule_vectors() {
    let fixture = load_fixture_value("golden/classification/rule_vectors.json");
    let classifier = PatternClassifier::new();

    for vector in fixture["vectors"].as_array().unwrap() {
        let id = vector["id"].as_str().unwrap();
        let scores: SubprocessScores = serde_json::from_value(vector["scores"].clone()).unwrap();
        assert_eq!(
            u64::from(scores.total()),
            vector["expected_total"].as_u64().unwrap(),
            "vector '{}': total",
            id
        );

        let m = classifier.classify_traced(&scores, scores.total());
        let expected_pattern: Pattern = vector["expected_pattern"].as_str().unwrap().parse().unwrap();
        assert_eq!(m.classification.pattern, expected_pattern, "vector '{}': pattern", id);
        assert_eq!(
            m.classification.confidence.as_str(),
            vector["expected_confidence"].as_str().unwrap(),
            "vector '{}': confidence",
            id
        );
        assert_eq!(m.rule, vector["expected_rule"].as_str().unwrap(), "vector '{}': rule", id);
    }
}

#[test]
fn strategic_rule_shadows_verification_rule() {
    // Satisfies both rule 2 and rule 3.
    let scores = SubprocessScores::from_clamped([2, 2, 2, 2, 2, 3, 2, 2, 2, 2, 2, 2]);
    let m = PatternClassifier::new().classify_traced(&scores, scores.total());
    assert_eq!(m.classification.pattern, Pattern::A);
    assert_eq!(m.rule, "strategic_decomposition");
}

#[test]
fn trait_dispatch_matches_inherent() {
    let classifier = PatternClassifier::new();
    let dynamic: &dyn IPatternClassifier = &classifier;
    let scores = SubprocessScores::from_clamped([1, 2, 2, 2, 2, 3, 2, 3, 2, 1, 1, 1]);
    assert_eq!(
        dynamic.classify(&scores, scores.total()),
        classifier.classify_scores(&scores)
    );
}

fn arb_scores() -> impl Strategy<Value = SubprocessScores> {
    prop::array::uniform12(0u8..=3).prop_map(SubprocessScores::from_clamped)
}

proptest! {
    #[test]
    fn exactly_one_rule_decides(scores in arb_scores()) {
        let total = scores.total();
        let first = all_rules().iter().position(|r| (r.applies)(&scores, total));
        prop_assert!(first.is_some());
    }

    #[test]
    fn low_totals_are_passive(scores in arb_scores()) {
        let c = PatternClassifier::new().classify_scores(&scores);
        if scores.total() < 15 {
            prop_assert_eq!(c.pattern, Pattern::F);
        }
        if scores.total() >= 20 {
            prop_assert_ne!(c.pattern, Pattern::F);
        }
        if (15..20).contains(&scores.total()) {
            prop_assert_eq!(c, mca_core::BatchClassification::new(Pattern::F, BatchConfidence::Moderate));
        }
    }

    #[test]
    fn pairing_fallback_is_low_confidence(scores in arb_scores()) {
        let m = PatternClassifier::new().classify_traced(&scores, scores.total());
        if m.rule == "strongest_pairing" {
            prop_assert_eq!(m.classification.confidence, BatchConfidence::Low);
            prop_assert_eq!(m.classification.pattern, strongest_pairing(&scores));
        }
    }
}
