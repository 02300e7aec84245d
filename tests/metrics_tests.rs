// Host-side tests for the frame-rate monitor and engagement tracking.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod metrics {
    include!("../src/core/metrics.rs");
}

use constants::*;
use metrics::*;

#[test]
fn fps_monitor_reports_once_per_window() {
    let mut mon = FpsMonitor::new(0.0);
    let mut reports = Vec::new();
    // 16ms frames, enough for two full windows
    let mut now = 0.0;
    for _ in 0..130 {
        now += 16.0;
        if let Some(fps) = mon.tick(now) {
            reports.push(fps);
        }
    }
    assert_eq!(reports.len(), 2);
    for fps in reports {
        assert!((55..=70).contains(&fps), "unexpected fps figure {fps}");
    }
}

#[test]
fn fps_monitor_flags_a_slow_second() {
    let mut mon = FpsMonitor::new(0.0);
    let mut now = 0.0;
    let mut reported = None;
    // 50ms frames: ~20fps
    for _ in 0..25 {
        now += 50.0;
        if let Some(fps) = mon.tick(now) {
            reported = Some(fps);
        }
    }
    let fps = reported.expect("a window should have elapsed");
    assert!(fps < FPS_WARN_THRESHOLD);
}

#[test]
fn engagement_goes_idle_after_quiet_period() {
    let mut e = Engagement::new(0.0);
    assert!(e.is_active());
    e.touch(1000.0);
    // Not yet idle just before the cutoff
    assert!(!e.idle_check(1000.0 + IDLE_TIMEOUT_MS - 1.0, IDLE_TIMEOUT_MS));
    assert!(e.is_active());
    // Idle exactly at the cutoff; the transition fires once
    assert!(e.idle_check(1000.0 + IDLE_TIMEOUT_MS, IDLE_TIMEOUT_MS));
    assert!(!e.is_active());
    assert!(!e.idle_check(1000.0 + IDLE_TIMEOUT_MS * 2.0, IDLE_TIMEOUT_MS));
}

#[test]
fn engagement_reactivation_restarts_the_active_clock() {
    let mut e = Engagement::new(0.0);
    e.idle_check(IDLE_TIMEOUT_MS, IDLE_TIMEOUT_MS);
    assert!(!e.is_active());
    e.touch(60_000.0);
    assert!(e.is_active());
    // Active time counts from reactivation, not from the session start
    assert!((e.active_secs(65_000.0) - 5.0).abs() < 1e-9);
}
