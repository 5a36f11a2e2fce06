use mca_context::ContextFilter;
use mca_core::traits::IContextFilter;
use mca_core::RiskClass;
use proptest::prelude::*;
use test_fixtures::load_fixture_value;

fn risk_key(risk_class: RiskClass) -> &'static str {
    risk_class.as_str()
}

#[test]
fn golden_filter_cases() {
    let fixture = load_fixture_value("golden/context/filter_cases.json");
    let window = fixture["window"].as_u64().unwrap() as usize;
    let filter = ContextFilter::with_window(window);

    for case in fixture["cases"].as_array().unwrap() {
        let id = case["id"].as_str().unwrap();
        let lines: Vec<&str> = case["lines"]
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l.as_str().unwrap())
            .collect();
        let text = lines.join("\n");

        for risk_class in RiskClass::ALL {
            let expected: Vec<usize> = case["expected"][risk_key(risk_class)]
                .as_array()
                .unwrap()
                .iter()
                .map(|i| i.as_u64().unwrap() as usize)
                .collect();
            assert_eq!(
                filter.included_lines(&text, risk_class),
                expected,
                "case '{}' ({})",
                id,
                risk_class
            );
            let expected_text = expected
                .iter()
                .map(|i| lines[*i])
                .collect::<Vec<_>>()
                .join("\n");
            assert_eq!(filter.filter_by_risk(&text, risk_class), expected_text);
        }
    }
}

#[test]
fn matching_lines_reports_indicators_only() {
    let text = "hello\nI wrote a paper\nbye\nformat this email";
    let filter = ContextFilter::new();
    assert_eq!(filter.matching_lines(text, RiskClass::High), vec![1]);
    assert_eq!(filter.matching_lines(text, RiskClass::Low), vec![3]);
}

#[test]
fn trait_dispatch() {
    let filter = ContextFilter::new();
    let dynamic: &dyn IContextFilter = &filter;
    let text = "We publish in a journal.";
    assert_eq!(dynamic.filter_by_risk(text, RiskClass::High), text);
}

proptest! {
    #[test]
    fn output_is_subsequence_of_input(
        lines in prop::collection::vec(
            prop_oneof![
                Just("filler line".to_string()),
                Just("my thesis".to_string()),
                Just("format the email".to_string()),
                "[a-z ]{0,20}",
            ],
            0..60,
        ),
        window in 0usize..12,
    ) {
        let text = lines.join("\n");
        let filter = ContextFilter::with_window(window);
        for risk_class in RiskClass::ALL {
            let out = filter.filter_by_risk(&text, risk_class);
            let mut source = text.lines();
            for kept in out.lines() {
                prop_assert!(source.any(|l| l == kept), "line {kept:?} out of order");
            }
            let included = filter.included_lines(&text, risk_class);
            prop_assert!(included.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
