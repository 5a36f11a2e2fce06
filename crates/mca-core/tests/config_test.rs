use mca_core::config::defaults;
use mca_core::{McaConfig, McaError};

#[test]
fn empty_toml_yields_defaults() {
    let config = McaConfig::from_toml("").unwrap();
    assert_eq!(config, McaConfig::default());
    assert_eq!(config.context.window, defaults::DEFAULT_CONTEXT_WINDOW);
    assert_eq!(config.recognizer.min_turns, defaults::DEFAULT_MIN_TURNS);
    assert!(!config.extraction.participant_only);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = McaConfig::from_toml(
        r#"
        [context]
        window = 4

        [recognizer]
        f_prior = 0.05
        "#,
    )
    .unwrap();
    assert_eq!(config.context.window, 4);
    assert_eq!(config.context.min_primary_chars, defaults::DEFAULT_MIN_PRIMARY_CHARS);
    assert_eq!(config.recognizer.f_prior, 0.05);
    assert_eq!(config.recognizer.margin_threshold, defaults::DEFAULT_MARGIN_THRESHOLD);
}

#[test]
fn rejects_out_of_range_prior() {
    let err = McaConfig::from_toml("[recognizer]\nf_prior = 1.5\n").unwrap_err();
    assert!(matches!(err, McaError::ConfigError(_)));
    assert!(err.to_string().contains("f_prior"));
}

#[test]
fn rejects_zero_min_primary_chars() {
    let err = McaConfig::from_toml("[context]\nmin_primary_chars = 0\n").unwrap_err();
    assert!(err.to_string().contains("min_primary_chars"));
}

#[test]
fn rejects_malformed_toml() {
    assert!(matches!(
        McaConfig::from_toml("[context\nwindow = "),
        Err(McaError::ConfigError(_))
    ));
}
