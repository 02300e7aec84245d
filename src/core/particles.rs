use glam::Vec2;
use rand::Rng;

use super::constants::*;

/// One point of the background field. Positions are canvas pixels; the whole
/// set is rebuilt only on a full re-initialization, never per particle.
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn spawn(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(
                rng.gen_range(0.0..width.max(1.0)),
                rng.gen_range(0.0..height.max(1.0)),
            ),
            vel: Vec2::new(
                rng.gen_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
                rng.gen_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
            ),
            radius: rng.gen_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MIN + PARTICLE_RADIUS_SPAN),
            opacity: rng
                .gen_range(PARTICLE_SPAWN_OPACITY_MIN..PARTICLE_SPAWN_OPACITY_MIN + PARTICLE_SPAWN_OPACITY_SPAN),
        }
    }

    /// One frame step: integrate position, wrap toroidally, pulse opacity.
    /// Coordinates stay within [0, dimension) and opacity within its clamp
    /// range regardless of step count.
    pub fn advance(&mut self, width: f32, height: f32, now_ms: f64) {
        self.pos += self.vel;
        self.pos.x = wrap(self.pos.x, width);
        self.pos.y = wrap(self.pos.y, height);

        let phase = now_ms * PULSE_TIME_SCALE + self.pos.x as f64 * PULSE_X_SCALE;
        self.opacity = (self.opacity + phase.sin() as f32 * PULSE_STEP).clamp(OPACITY_MIN, OPACITY_MAX);
    }
}

#[inline]
fn wrap(v: f32, limit: f32) -> f32 {
    if limit <= 0.0 {
        return 0.0;
    }
    v.rem_euclid(limit)
}

pub fn spawn_field(rng: &mut impl Rng, count: usize, width: f32, height: f32) -> Vec<Particle> {
    (0..count).map(|_| Particle::spawn(rng, width, height)).collect()
}

/// 30 particles below the narrow-viewport threshold, 50 above. The upper
/// bound must not be raised without revisiting the O(n^2) pair pass.
#[inline]
pub fn particle_count_for_width(viewport_width: f64) -> usize {
    if viewport_width < NARROW_VIEWPORT_PX {
        PARTICLE_COUNT_NARROW
    } else {
        PARTICLE_COUNT_WIDE
    }
}

/// Alpha of the line joining a particle pair: fades linearly from
/// LINK_ALPHA_MAX at zero distance to 0 at LINK_DISTANCE_PX.
#[inline]
pub fn link_alpha(distance: f32) -> f32 {
    if distance >= LINK_DISTANCE_PX {
        0.0
    } else {
        LINK_ALPHA_MAX * (1.0 - distance / LINK_DISTANCE_PX)
    }
}
