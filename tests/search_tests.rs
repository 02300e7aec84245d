// Host-side tests for the search index and form validation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod search {
    include!("../src/core/search.rs");
}
mod forms {
    include!("../src/core/forms.rs");
}

use forms::*;
use search::*;

fn index() -> SearchIndex {
    let mut idx = SearchIndex::default();
    idx.push("The Qur'an is Fully Detailed", "beliefs", EntryKind::Card);
    idx.push("Divine Preservation Guarantee", "beliefs", EntryKind::Card);
    idx.push("Core Beliefs", "beliefs", EntryKind::Section);
    idx.push("What about the five daily prayers?", "faq", EntryKind::Faq);
    idx.push("The Qur'an contains all the detail needed.", "faq", EntryKind::Faq);
    idx
}

#[test]
fn query_is_case_insensitive_containment() {
    let idx = index();
    let hits = idx.query("DETAIL", 8);
    assert_eq!(hits.len(), 2);
    for i in hits {
        assert!(idx.entry(i).unwrap().text.contains("detail"));
    }
}

#[test]
fn query_uses_trimmed_input_and_empty_matches_nothing() {
    let idx = index();
    assert!(idx.query("", 8).is_empty());
    assert!(idx.query("   ", 8).is_empty());
    assert_eq!(idx.query("  divine  ", 8).len(), 1);
}

#[test]
fn query_respects_the_result_limit() {
    let mut idx = SearchIndex::default();
    for i in 0..20 {
        idx.push(&format!("entry number {i}"), "s", EntryKind::Content);
    }
    assert_eq!(idx.query("entry", 8).len(), 8);
}

#[test]
fn entries_record_section_and_kind() {
    let idx = index();
    let hits = idx.query("preservation", 8);
    assert_eq!(hits.len(), 1);
    let entry = idx.entry(hits[0]).unwrap();
    assert_eq!(entry.section, "beliefs");
    assert_eq!(entry.kind, EntryKind::Card);
    assert_eq!(entry.kind.label(), "card");
}

#[test]
fn highlight_wraps_every_occurrence() {
    let marked = highlight("the detail of the detailed book", "detail");
    assert_eq!(
        marked,
        "the <mark>detail</mark> of the <mark>detail</mark>ed book"
    );
    // No match leaves the text untouched
    assert_eq!(highlight("plain text", "zzz"), "plain text");
    assert_eq!(highlight("plain text", ""), "plain text");
}

#[test]
fn faq_filter_matches_question_or_answer() {
    assert!(faq_matches("What about prayer?", "The Qur'an describes it.", "PRAYER"));
    assert!(faq_matches("What about prayer?", "The Qur'an describes it.", "describes"));
    assert!(!faq_matches("What about prayer?", "The Qur'an describes it.", "hadith"));
    // Empty query shows everything
    assert!(faq_matches("q", "a", ""));
    assert!(faq_matches("q", "a", "   "));
}

#[test]
fn email_validation_accepts_plain_addresses() {
    assert!(validate_email("reader@example.com"));
    assert!(validate_email("a.b+c@sub.domain.org"));
}

#[test]
fn email_validation_rejects_malformed_addresses() {
    assert!(!validate_email(""));
    assert!(!validate_email("no-at-sign.com"));
    assert!(!validate_email("two@@example.com"));
    assert!(!validate_email("@example.com"));
    assert!(!validate_email("user@"));
    assert!(!validate_email("user@nodot"));
    assert!(!validate_email("user@domain."));
    assert!(!validate_email("user@.com"));
    assert!(!validate_email("spa ce@example.com"));
}

#[test]
fn email_domain_is_extracted_for_logging() {
    assert_eq!(email_domain("reader@example.com"), Some("example.com"));
    assert_eq!(email_domain("not-an-email"), None);
}
