use mca_classification::{evaluate, LabeledScores, PatternClassifier};
use mca_core::Pattern;
use test_fixtures::load_fixture_value;

#[test]
fn golden_evaluation_report() {
    let fixture = load_fixture_value("golden/evaluation/labeled_scores.json");
    let records: Vec<LabeledScores> = serde_json::from_value(fixture["records"].clone()).unwrap();
    let expected = &fixture["expected"];

    let report = evaluate(&PatternClassifier::new(), &records);

    assert_eq!(u64::from(report.total), expected["total"].as_u64().unwrap());
    assert_eq!(u64::from(report.correct), expected["correct"].as_u64().unwrap());
    assert!((report.accuracy - expected["accuracy"].as_f64().unwrap()).abs() < 1e-9);

    for (letter, metrics) in expected["per_pattern"].as_object().unwrap() {
        let pattern: Pattern = letter.parse().unwrap();
        let actual = report.metrics(pattern);
        for (field, value) in [
            ("precision", actual.precision),
            ("recall", actual.recall),
            ("f1", actual.f1),
        ] {
            assert!(
                (value - metrics[field].as_f64().unwrap()).abs() < 1e-9,
                "{letter} {field}: {value}"
            );
        }
        assert_eq!(u64::from(actual.support), metrics["support"].as_u64().unwrap());
    }

    for cell in expected["confusion"].as_array().unwrap() {
        let expected_pattern: Pattern = cell[0].as_str().unwrap().parse().unwrap();
        let predicted: Pattern = cell[1].as_str().unwrap().parse().unwrap();
        assert_eq!(
            u64::from(report.confusion_count(expected_pattern, predicted)),
            cell[2].as_u64().unwrap()
        );
    }
    assert_eq!(report.passive_recall(), 0.5);
    assert_eq!(report.misclassified.len(), 2);
}

#[test]
fn report_serializes_for_the_cli() {
    let report = evaluate(&PatternClassifier::new(), &[]);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["per_pattern"].as_object().unwrap().len(), 6);
    assert_eq!(json["confusion"].as_array().unwrap().len(), 6);
}
