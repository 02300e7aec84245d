// Host-side tests for the scroll derivations and frame coalescing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}

use constants::*;
use scroll::*;

fn sample(offset: f64, prev_offset: f64) -> ScrollSample {
    ScrollSample {
        offset,
        prev_offset,
        document_height: 5000.0,
        viewport_height: 1000.0,
    }
}

#[test]
fn header_hides_only_scrolling_down_past_threshold() {
    // Scrolling down, above the threshold
    assert!(derive_view(sample(300.0, 250.0)).header_hidden);
    // Scrolling down, still below the threshold
    assert!(!derive_view(sample(150.0, 100.0)).header_hidden);
    // Scrolling up past the threshold keeps the header visible
    assert!(!derive_view(sample(300.0, 400.0)).header_hidden);
}

#[test]
fn header_scrolled_style_state() {
    assert!(!derive_view(sample(50.0, 0.0)).header_scrolled);
    assert!(derive_view(sample(51.0, 0.0)).header_scrolled);
}

#[test]
fn page_progress_is_a_clamped_fraction() {
    let v = derive_view(sample(0.0, 0.0));
    assert_eq!(v.page_progress, 0.0);
    // Fully scrolled: offset equals scrollable distance (5000 - 1000)
    let v = derive_view(sample(4000.0, 3900.0));
    assert!((v.page_progress - 1.0).abs() < 1e-9);
    // Overscroll clamps
    let v = derive_view(sample(9000.0, 8000.0));
    assert_eq!(v.page_progress, 1.0);
    // Midpoint
    let v = derive_view(sample(2000.0, 1900.0));
    assert!((v.page_progress - 0.5).abs() < 1e-9);
}

#[test]
fn floating_buttons_show_past_threshold() {
    assert!(!derive_view(sample(FLOATING_SHOW_OFFSET_PX, 0.0)).floating_visible);
    assert!(derive_view(sample(FLOATING_SHOW_OFFSET_PX + 1.0, 0.0)).floating_visible);
}

#[test]
fn reading_progress_tracks_region_visibility() {
    // Region below the fold: nothing read yet
    assert_eq!(reading_progress(1000.0, 2000.0, 3000.0), 0.0);
    // Region scrolled fully past: complete
    assert_eq!(reading_progress(1000.0, -3000.0, 3000.0), 1.0);
    // Partway through
    let p = reading_progress(1000.0, -1000.0, 3000.0);
    assert!((p - 0.5).abs() < 1e-9);
    // Degenerate geometry degrades to zero instead of dividing by zero
    assert_eq!(reading_progress(0.0, 0.0, 0.0), 0.0);
}

#[test]
fn parallax_speeds_increase_per_layer() {
    let offset = 100.0;
    let mut prev = parallax_offset(offset, 0);
    assert!((prev - offset * PARALLAX_BASE_SPEED).abs() < 1e-9);
    for layer in 1..5 {
        let o = parallax_offset(offset, layer);
        assert!(o > prev);
        assert!((o - prev - offset * PARALLAX_SPEED_STEP).abs() < 1e-9);
        prev = o;
    }
}

#[test]
fn frame_gate_coalesces_to_one_update_per_frame() {
    let mut gate = FrameGate::default();
    // A burst of scroll events within one frame schedules exactly once.
    let scheduled = (0..25).filter(|_| gate.request()).count();
    assert_eq!(scheduled, 1);
    // After the frame runs, the next event schedules again.
    gate.complete();
    assert!(gate.request());
    assert!(!gate.request());
}
