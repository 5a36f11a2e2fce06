//! Score vector invariants and wire format.

use mca_core::{Dimension, EvidenceScore, Family, SubprocessScores};
use proptest::prelude::*;

fn arb_scores() -> impl Strategy<Value = SubprocessScores> {
    prop::array::uniform12(0u8..=3).prop_map(SubprocessScores::from_clamped)
}

proptest! {
    #[test]
    fn total_is_sum_and_in_range(scores in arb_scores()) {
        let sum: u32 = scores.values().iter().map(|v| u32::from(*v)).sum();
        prop_assert_eq!(u32::from(scores.total()), sum);
        prop_assert!(scores.total() <= 36);
    }

    #[test]
    fn family_totals_partition_total(scores in arb_scores()) {
        let by_family: u8 = Family::ALL.iter().map(|f| scores.family_total(*f)).sum();
        prop_assert_eq!(by_family, scores.total());
    }

    #[test]
    fn json_roundtrip_preserves_vector(scores in arb_scores()) {
        let json = serde_json::to_string(&scores).unwrap();
        let back: SubprocessScores = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, scores);
    }

    #[test]
    fn clamping_never_exceeds_three(raw in prop::array::uniform12(any::<u8>())) {
        let scores = SubprocessScores::from_clamped(raw);
        prop_assert!(scores.iter().all(|(_, s)| s.value() <= 3));
    }
}

#[test]
fn serializes_with_short_codes() {
    let mut scores = SubprocessScores::zero();
    scores.set(Dimension::QualityChecking, EvidenceScore::STRONG);
    let json = serde_json::to_value(scores).unwrap();
    assert_eq!(json["m2"], 3);
    assert_eq!(json["p1"], 0);
    assert_eq!(json.as_object().unwrap().len(), 12);
}

#[test]
fn deserialization_rejects_out_of_range_values() {
    let json = r#"{"p1":4,"p2":0,"p3":0,"p4":0,"m1":0,"m2":0,"m3":0,"e1":0,"e2":0,"e3":0,"r1":0,"r2":0}"#;
    assert!(serde_json::from_str::<SubprocessScores>(json).is_err());
}

#[test]
fn dimension_codes_roundtrip() {
    for dimension in Dimension::ALL {
        assert_eq!(Dimension::from_code(dimension.code()), Some(dimension));
    }
    assert_eq!(Dimension::from_code("X9"), None);
}

#[test]
fn every_dimension_belongs_to_exactly_one_family() {
    let mut seen = Vec::new();
    for family in Family::ALL {
        for dimension in family.dimensions() {
            assert_eq!(dimension.family(), family);
            seen.push(*dimension);
        }
    }
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 12);
}
