// Host-side tests for the pure particle model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use constants::*;
use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const W: f32 = 800.0;
const H: f32 = 600.0;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn spawn_places_particles_inside_bounds() {
    let mut rng = rng();
    for p in spawn_field(&mut rng, 50, W, H) {
        assert!(p.pos.x >= 0.0 && p.pos.x < W);
        assert!(p.pos.y >= 0.0 && p.pos.y < H);
        assert!(p.vel.x.abs() <= PARTICLE_MAX_SPEED);
        assert!(p.vel.y.abs() <= PARTICLE_MAX_SPEED);
        assert!(p.radius >= PARTICLE_RADIUS_MIN);
        assert!(p.radius < PARTICLE_RADIUS_MIN + PARTICLE_RADIUS_SPAN);
    }
}

#[test]
fn coordinates_stay_in_bounds_after_many_steps() {
    let mut rng = rng();
    let mut field = spawn_field(&mut rng, 20, W, H);
    for step in 0..10_000 {
        let now_ms = step as f64 * 16.0;
        for p in &mut field {
            p.advance(W, H, now_ms);
            assert!(p.pos.x >= 0.0 && p.pos.x < W, "x out of bounds: {}", p.pos.x);
            assert!(p.pos.y >= 0.0 && p.pos.y < H, "y out of bounds: {}", p.pos.y);
        }
    }
}

#[test]
fn wrap_is_toroidal_not_clamped() {
    let mut rng = rng();
    let mut p = Particle::spawn(&mut rng, W, H);
    // Force a walk off the right edge; it must reappear near the left edge.
    p.pos.x = W - 0.05;
    p.vel.x = PARTICLE_MAX_SPEED;
    p.advance(W, H, 0.0);
    assert!(p.pos.x < 1.0, "expected wrap to the opposite edge, got {}", p.pos.x);
}

#[test]
fn opacity_stays_clamped_after_many_steps() {
    let mut rng = rng();
    let mut field = spawn_field(&mut rng, 20, W, H);
    for step in 0..10_000 {
        let now_ms = step as f64 * 16.0;
        for p in &mut field {
            p.advance(W, H, now_ms);
            assert!(p.opacity >= OPACITY_MIN - 1e-6);
            assert!(p.opacity <= OPACITY_MAX + 1e-6);
        }
    }
}

#[test]
fn link_alpha_fades_to_zero_at_threshold() {
    assert_eq!(link_alpha(LINK_DISTANCE_PX), 0.0);
    assert_eq!(link_alpha(LINK_DISTANCE_PX + 50.0), 0.0);
    assert!((link_alpha(0.0) - LINK_ALPHA_MAX).abs() < 1e-6);
}

#[test]
fn link_alpha_is_monotonically_decreasing() {
    let mut prev = link_alpha(0.0);
    for d in 1..=100 {
        let a = link_alpha(d as f32);
        assert!(a <= prev, "alpha increased at distance {d}");
        prev = a;
    }
}

#[test]
fn particle_count_tracks_viewport_class() {
    assert_eq!(particle_count_for_width(320.0), PARTICLE_COUNT_NARROW);
    assert_eq!(particle_count_for_width(NARROW_VIEWPORT_PX - 1.0), PARTICLE_COUNT_NARROW);
    assert_eq!(particle_count_for_width(NARROW_VIEWPORT_PX), PARTICLE_COUNT_WIDE);
    assert_eq!(particle_count_for_width(1920.0), PARTICLE_COUNT_WIDE);
    // The pair pass is O(n^2); this bound is load-bearing.
    assert!(PARTICLE_COUNT_WIDE <= 50);
}
