use glam::Vec2;

use super::constants::RING_LERP_FACTOR;

/// Trailing-ring state for the custom cursor. The dot snaps to the raw
/// pointer every frame with no smoothing; only the ring carries state, an
/// exponential decay toward the latest raw sample.
#[derive(Default, Clone, Copy)]
pub struct RingFollower {
    pub pos: Vec2,
}

impl RingFollower {
    /// Advance one frame toward `raw` and return the new ring position.
    pub fn step(&mut self, raw: Vec2) -> Vec2 {
        self.pos += (raw - self.pos) * RING_LERP_FACTOR;
        self.pos
    }
}
