//! Property tests: extraction is total, deterministic, and in range.

use mca_extraction::FeatureExtractor;
use proptest::prelude::*;

proptest! {
    #[test]
    fn arbitrary_text_scores_in_range(text in "\\PC{0,400}") {
        let scores = FeatureExtractor::new().extract(&text);
        prop_assert!(scores.iter().all(|(_, s)| s.value() <= 3));
        prop_assert!(scores.total() <= 36);
    }

    #[test]
    fn extraction_is_deterministic(text in "[a-zA-Z ,.\n]{0,200}") {
        let extractor = FeatureExtractor::new();
        prop_assert_eq!(extractor.extract(&text), extractor.extract(&text));
    }

    #[test]
    fn mixed_script_text_never_panics(
        en in "[a-z ]{0,80}",
        zh in "[\u{4E00}-\u{4FFF}。，]{0,40}",
    ) {
        let text = format!("{en}\n{zh}\nUser: {en}{zh}");
        let extractor = FeatureExtractor::new();
        let _ = extractor.extract(&text);
        let _ = extractor.extract_participant(&text);
        let _ = extractor.explain(&text);
    }
}
