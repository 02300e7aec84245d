use super::constants::FPS_WINDOW_MS;

/// Counters surfaced in the structured performance log.
#[derive(Default, Clone, Copy, Debug)]
pub struct Metrics {
    pub load_time_ms: f64,
    pub interaction_count: u32,
    pub scroll_events: u32,
}

/// Rolling frame counter; yields an fps figure once per elapsed window.
pub struct FpsMonitor {
    window_start_ms: f64,
    frames: u32,
}

impl FpsMonitor {
    pub fn new(now_ms: f64) -> Self {
        Self {
            window_start_ms: now_ms,
            frames: 0,
        }
    }

    pub fn tick(&mut self, now_ms: f64) -> Option<u32> {
        self.frames += 1;
        let elapsed = now_ms - self.window_start_ms;
        if elapsed >= FPS_WINDOW_MS {
            let fps = (self.frames as f64 * 1000.0 / elapsed).round() as u32;
            self.frames = 0;
            self.window_start_ms = now_ms;
            Some(fps)
        } else {
            None
        }
    }
}

/// Session activity with an idle cutoff. Activity events re-arm the clock;
/// a quiet stretch past the timeout marks the session idle.
pub struct Engagement {
    active: bool,
    active_since_ms: f64,
    last_activity_ms: f64,
}

impl Engagement {
    pub fn new(now_ms: f64) -> Self {
        Self {
            active: true,
            active_since_ms: now_ms,
            last_activity_ms: now_ms,
        }
    }

    pub fn touch(&mut self, now_ms: f64) {
        if !self.active {
            self.active = true;
            self.active_since_ms = now_ms;
        }
        self.last_activity_ms = now_ms;
    }

    /// Re-evaluate the idle cutoff; returns true when this call flipped the
    /// session from active to idle.
    pub fn idle_check(&mut self, now_ms: f64, timeout_ms: f64) -> bool {
        if self.active && now_ms - self.last_activity_ms >= timeout_ms {
            self.active = false;
            return true;
        }
        false
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn active_secs(&self, now_ms: f64) -> f64 {
        ((now_ms - self.active_since_ms) / 1000.0).max(0.0)
    }
}
