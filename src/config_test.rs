use super::*;

#[test]
fn default_matches_page_script_names() {
    let config = DarkModeConfig::default();
    assert_eq!(config.storage_key, "darkMode");
    assert_eq!(config.marker_class, "dark-mode");
    assert_eq!(config.target, MarkerTarget::Body);
    assert!(config.validate().is_ok());
}

#[test]
fn from_json_empty_object_uses_defaults() {
    let config = DarkModeConfig::from_json("{}").expect("parse");
    assert_eq!(config, DarkModeConfig::default());
}

#[test]
fn from_json_overrides_fields() {
    let config = DarkModeConfig::from_json(r#"{"storage_key":"site_theme","marker_class":"theme-dark","target":"html"}"#)
        .expect("parse");
    assert_eq!(config.storage_key, "site_theme");
    assert_eq!(config.marker_class, "theme-dark");
    assert_eq!(config.target, MarkerTarget::Html);
}

#[test]
fn from_json_partial_keeps_remaining_defaults() {
    let config = DarkModeConfig::from_json(r#"{"target":"html"}"#).expect("parse");
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(config.marker_class, DEFAULT_MARKER_CLASS);
    assert_eq!(config.target, MarkerTarget::Html);
}

#[test]
fn from_json_rejects_malformed_document() {
    let err = DarkModeConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, DarkModeError::Config(_)));
}

#[test]
fn from_json_rejects_unknown_fields() {
    let err = DarkModeConfig::from_json(r#"{"storage":"x"}"#).unwrap_err();
    assert!(matches!(err, DarkModeError::Config(_)));
}

#[test]
fn from_json_rejects_unknown_target() {
    let err = DarkModeConfig::from_json(r#"{"target":"main"}"#).unwrap_err();
    assert!(matches!(err, DarkModeError::Config(_)));
}

#[test]
fn validate_rejects_empty_storage_key() {
    let config = DarkModeConfig { storage_key: String::new(), ..DarkModeConfig::default() };
    assert!(matches!(config.validate(), Err(DarkModeError::Config(_))));
}

#[test]
fn validate_rejects_empty_marker_class() {
    let err = DarkModeConfig::from_json(r#"{"marker_class":""}"#).unwrap_err();
    assert!(matches!(err, DarkModeError::Config(_)));
}

#[test]
fn validate_rejects_marker_class_with_whitespace() {
    let err = DarkModeConfig::from_json(r#"{"marker_class":"dark mode"}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "config invalid: marker_class 'dark mode' must be a single class name"
    );
}

#[test]
fn from_embedded_missing_or_blank_uses_defaults() {
    assert_eq!(DarkModeConfig::from_embedded(None), DarkModeConfig::default());
    assert_eq!(DarkModeConfig::from_embedded(Some("  \n ")), DarkModeConfig::default());
}

#[test]
fn from_embedded_parses_surrounding_whitespace() {
    let config = DarkModeConfig::from_embedded(Some("\n  {\"marker_class\": \"night\"}\n"));
    assert_eq!(config.marker_class, "night");
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
}

#[test]
fn from_embedded_invalid_falls_back_to_defaults() {
    assert_eq!(DarkModeConfig::from_embedded(Some("{\"marker_class\": 3}")), DarkModeConfig::default());
    assert_eq!(DarkModeConfig::from_embedded(Some("{\"storage_key\": \"\"}")), DarkModeConfig::default());
}
