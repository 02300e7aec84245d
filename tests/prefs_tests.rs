// Host-side tests for the persisted preference records.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod prefs {
    include!("../src/core/prefs.rs");
}

use prefs::*;

#[test]
fn prefs_serialize_with_camel_case_keys() {
    let prefs = AccessibilityPrefs {
        font_size: Some(18.0),
        line_height: Some(1.8),
        high_contrast: Some(true),
        reduce_motion: Some(false),
    };
    let json = prefs.to_json();
    assert!(json.contains("\"fontSize\":18.0"));
    assert!(json.contains("\"lineHeight\":1.8"));
    assert!(json.contains("\"highContrast\":true"));
    assert!(json.contains("\"reduceMotion\":false"));
}

#[test]
fn unset_fields_are_omitted_from_the_record() {
    let prefs = AccessibilityPrefs {
        high_contrast: Some(true),
        ..Default::default()
    };
    let json = prefs.to_json();
    assert!(!json.contains("fontSize"));
    assert!(!json.contains("lineHeight"));
    assert!(!json.contains("reduceMotion"));
    assert_eq!(AccessibilityPrefs::parse(&json), prefs);
}

#[test]
fn a_partial_record_parses_with_defaults() {
    let prefs = AccessibilityPrefs::parse(r#"{"fontSize":20.0}"#);
    assert_eq!(prefs.font_size, Some(20.0));
    assert_eq!(prefs.line_height, None);
    assert_eq!(prefs.high_contrast, None);
}

#[test]
fn a_corrupt_record_degrades_to_defaults() {
    assert_eq!(AccessibilityPrefs::parse("not json"), AccessibilityPrefs::default());
    assert_eq!(AccessibilityPrefs::parse(""), AccessibilityPrefs::default());
}

#[test]
fn theme_names_round_trip_and_unknowns_default_dark() {
    assert_eq!(Theme::from_name("dark"), Theme::Dark);
    assert_eq!(Theme::from_name("light"), Theme::Light);
    assert_eq!(Theme::from_name("solarized"), Theme::Dark);
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
}

#[test]
fn theme_toggle_alternates() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}
