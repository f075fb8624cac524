//! Integration tests for Settings loading.
//!
//! These tests pass an explicit global config path (temp directories only),
//! so the user's real config never takes part.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use patternbook::application::ApplicationError;
use patternbook::config::Settings;
use patternbook::domain::OsVariant;

#[test]
fn given_no_global_file_when_load_then_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("patternbook.toml");

    let settings = Settings::load_from(Some(&missing)).expect("load settings");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_file_when_load_then_overrides_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("patternbook.toml");
    fs::write(
        &path,
        r#"
order = "Dig in"
os = "google"
hierarchy = "/srv/org/2nd.toml"
"#,
    )
    .unwrap();

    let settings = Settings::load_from(Some(&path)).expect("load settings");

    assert_eq!(settings.order, "Dig in");
    assert_eq!(settings.os_variant().unwrap(), OsVariant::Google);
    assert_eq!(settings.hierarchy, Some(PathBuf::from("/srv/org/2nd.toml")));
}

#[test]
fn given_partial_global_file_when_load_then_keeps_remaining_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("patternbook.toml");
    fs::write(&path, "os = \"google\"\n").unwrap();

    let settings = Settings::load_from(Some(&path)).expect("load settings");

    assert_eq!(settings.os, "google");
    assert_eq!(settings.order, "Move out");
    assert_eq!(settings.hierarchy, None);
}

#[test]
fn given_malformed_global_file_when_load_then_returns_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("patternbook.toml");
    fs::write(&path, "order = \n").unwrap();

    let err = Settings::load_from(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}

#[test]
fn given_effective_settings_when_shown_then_round_trips_through_toml() {
    let settings = Settings {
        hierarchy: Some(PathBuf::from("/srv/org/2nd.toml")),
        order: "Hold the line".to_string(),
        os: "google".to_string(),
    };

    let shown = settings.to_toml().unwrap();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("patternbook.toml");
    fs::write(&path, shown).unwrap();

    assert_eq!(Settings::load_from(Some(&path)).unwrap(), settings);
}
