use super::*;

#[test]
fn defaults() {
    let c = AnalysisConfig::default();
    assert_eq!(c.max_depth, 4);
    assert_eq!(c.swing_threshold, 1.0);
    assert_eq!(c.severe_swing, 8.0);
    assert!(c.time_limit().is_none());
    assert_eq!(c.weights, EvalWeights::default());
}

#[test]
fn empty_file_gives_defaults() {
    let c = AnalysisConfig::from_toml_str("", "empty.toml").unwrap();
    assert_eq!(c, AnalysisConfig::default());
}

#[test]
fn partial_overrides() {
    let text = r#"
max_depth = 6
time_limit_ms = 1500

[weights]
mobility = 0.05
"#;
    let c = AnalysisConfig::from_toml_str(text, "partial.toml").unwrap();
    assert_eq!(c.max_depth, 6);
    assert_eq!(c.time_limit(), Some(Duration::from_millis(1500)));
    assert_eq!(c.swing_threshold, 1.0);
    assert_eq!(c.weights.mobility, 0.05);
    assert_eq!(c.weights.material, 0.1);
}

#[test]
fn bad_value_is_a_parse_error() {
    let err = AnalysisConfig::from_toml_str("max_depth = \"deep\"", "bad.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = AnalysisConfig::load(Path::new("/nonexistent/othello/analysis.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
