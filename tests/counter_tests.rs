// Host-side tests for the stat count-up and the debounce gate.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod counter {
    include!("../src/core/counter.rs");
}
mod debounce {
    include!("../src/core/debounce.rs");
}

use counter::*;
use debounce::*;

#[test]
fn counter_lands_exactly_on_target() {
    // 1400 over 2000ms at 16ms steps must display exactly 1400 at the end.
    let mut c = CountUp::new(1400.0, 2000.0, 16.0);
    let mut last = 0.0;
    let mut steps = 0;
    loop {
        let (value, done) = c.step();
        assert!(value <= 1400.0, "overshoot: {value}");
        assert!(value >= last, "displayed value went backwards");
        last = value;
        steps += 1;
        if done {
            break;
        }
        assert!(steps < 1000, "counter never finished");
    }
    assert_eq!(last, 1400.0);
}

#[test]
fn counter_displays_whole_numbers_mid_flight() {
    let mut c = CountUp::new(1400.0, 2000.0, 16.0);
    let (value, done) = c.step();
    assert!(!done);
    assert_eq!(value, value.floor());
}

#[test]
fn counter_with_tiny_target_still_terminates() {
    let mut c = CountUp::new(3.0, 2000.0, 16.0);
    let mut steps = 0;
    loop {
        let (_, done) = c.step();
        steps += 1;
        if done {
            break;
        }
        assert!(steps < 1000);
    }
}

#[test]
fn counter_with_degenerate_duration_finishes_in_one_step() {
    let mut c = CountUp::new(10.0, 0.0, 16.0);
    let (value, done) = c.step();
    assert!(done);
    assert_eq!(value, 10.0);
}

#[test]
fn grouped_formatting_inserts_thousands_separators() {
    assert_eq!(format_grouped(0), "0");
    assert_eq!(format_grouped(999), "999");
    assert_eq!(format_grouped(1400), "1,400");
    assert_eq!(format_grouped(12345), "12,345");
    assert_eq!(format_grouped(1234567), "1,234,567");
}

#[test]
fn debounce_gate_fires_only_for_the_latest_token() {
    let mut gate = DebounceGate::default();
    // Three keystrokes inside the quiet window: three armed tokens.
    let t1 = gate.arm();
    let t2 = gate.arm();
    let t3 = gate.arm();
    // When the delayed callbacks run, only the last is still current, so a
    // burst of input produces exactly one execution.
    let fired = [t1, t2, t3].iter().filter(|t| gate.is_current(**t)).count();
    assert_eq!(fired, 1);
    assert!(gate.is_current(t3));
}

#[test]
fn debounce_gate_new_input_invalidates_pending_execution() {
    let mut gate = DebounceGate::default();
    let pending = gate.arm();
    assert!(gate.is_current(pending));
    let newer = gate.arm();
    assert!(!gate.is_current(pending));
    assert!(gate.is_current(newer));
}
