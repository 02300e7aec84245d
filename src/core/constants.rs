/// Derivation constants shared by the pure core modules.
///
/// These express intended behavior (thresholds, smoothing factors, clamp
/// limits) and keep magic numbers out of the derivation code.
// Particle field
pub const PARTICLE_COUNT_NARROW: usize = 30;
pub const PARTICLE_COUNT_WIDE: usize = 50; // hard bound; the pair pass is O(n^2)
pub const NARROW_VIEWPORT_PX: f64 = 768.0;

pub const PARTICLE_MAX_SPEED: f32 = 0.25; // px per frame, per axis
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;
pub const PARTICLE_SPAWN_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_SPAWN_OPACITY_SPAN: f32 = 0.5;

// Opacity pulse: opacity += sin(t*TIME_SCALE + x*X_SCALE) * STEP, clamped
pub const PULSE_TIME_SCALE: f64 = 0.001;
pub const PULSE_X_SCALE: f64 = 0.01;
pub const PULSE_STEP: f32 = 0.01;
pub const OPACITY_MIN: f32 = 0.1;
pub const OPACITY_MAX: f32 = 0.7;

// Proximity links
pub const LINK_DISTANCE_PX: f32 = 100.0;
pub const LINK_ALPHA_MAX: f32 = 0.1;

// Cursor trailing ring: new = old + (raw - old) * factor
pub const RING_LERP_FACTOR: f32 = 0.1;

// Scroll-derived state thresholds (px of vertical offset)
pub const HEADER_HIDE_OFFSET_PX: f64 = 200.0;
pub const HEADER_SCROLLED_OFFSET_PX: f64 = 50.0;
pub const FLOATING_SHOW_OFFSET_PX: f64 = 600.0;

// Parallax layer speed = BASE + STEP * layer index
pub const PARALLAX_BASE_SPEED: f64 = 0.1;
pub const PARALLAX_SPEED_STEP: f64 = 0.05;

// Stat counters
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_FRAME_MS: f64 = 16.0;

// Frame-rate monitor
pub const FPS_WINDOW_MS: f64 = 1000.0;
pub const FPS_WARN_THRESHOLD: u32 = 30;

// Engagement
pub const IDLE_TIMEOUT_MS: f64 = 30_000.0;
