use super::*;

// =============================================================
// from_stored
// =============================================================

#[test]
fn from_stored_true_is_enabled() {
    assert_eq!(ThemeState::from_stored(Some("true")), ThemeState::Enabled);
}

#[test]
fn from_stored_absent_is_disabled() {
    assert_eq!(ThemeState::from_stored(None), ThemeState::Disabled);
}

#[test]
fn from_stored_false_is_disabled() {
    assert_eq!(ThemeState::from_stored(Some("false")), ThemeState::Disabled);
}

#[test]
fn from_stored_unrecognized_text_is_disabled() {
    assert_eq!(ThemeState::from_stored(Some("yes")), ThemeState::Disabled);
    assert_eq!(ThemeState::from_stored(Some("1")), ThemeState::Disabled);
    assert_eq!(ThemeState::from_stored(Some("")), ThemeState::Disabled);
}

#[test]
fn from_stored_is_case_and_whitespace_sensitive() {
    assert_eq!(ThemeState::from_stored(Some("TRUE")), ThemeState::Disabled);
    assert_eq!(ThemeState::from_stored(Some("True")), ThemeState::Disabled);
    assert_eq!(ThemeState::from_stored(Some(" true")), ThemeState::Disabled);
}

// =============================================================
// as_stored
// =============================================================

#[test]
fn as_stored_uses_boolean_literals() {
    assert_eq!(ThemeState::Enabled.as_stored(), "true");
    assert_eq!(ThemeState::Disabled.as_stored(), "false");
}

#[test]
fn default_is_disabled() {
    assert_eq!(ThemeState::default(), ThemeState::Disabled);
    assert!(!ThemeState::default().is_enabled());
}

#[test]
fn from_bool_maps_to_state() {
    assert_eq!(ThemeState::from(true), ThemeState::Enabled);
    assert_eq!(ThemeState::from(false), ThemeState::Disabled);
}
