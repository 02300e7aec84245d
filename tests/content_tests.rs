// Host-side tests for the precomposed informational panel content.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod content {
    include!("../src/core/content.rs");
}

use content::*;

#[test]
fn every_key_resolves_to_nonempty_content() {
    for key in MODAL_KEYS {
        let entry = modal_entry(key).unwrap_or_else(|| panic!("missing entry for {key}"));
        assert!(!entry.title.is_empty());
        assert!(!entry.body.trim().is_empty());
    }
}

#[test]
fn unknown_keys_resolve_to_nothing() {
    assert!(modal_entry("").is_none());
    assert!(modal_entry("not-a-panel").is_none());
}

#[test]
fn every_body_contains_a_focusable_anchor() {
    // The modal focus hand-off targets the first focusable element; each
    // body must therefore carry at least one link.
    for key in MODAL_KEYS {
        let entry = modal_entry(key).unwrap();
        assert!(entry.body.contains("href="), "no focusable anchor in {key}");
    }
}

#[test]
fn bodies_are_wrapped_in_a_modal_section() {
    for key in MODAL_KEYS {
        let entry = modal_entry(key).unwrap();
        assert!(entry.body.trim_start().starts_with(r#"<div class="modal-section">"#));
        assert!(entry.body.trim_end().ends_with("</div>"));
    }
}
