/// Wiring-layer tuning constants: breakpoints, timer periods, observer
/// geometry. Derivation constants live in `core::constants`.
// Viewport breakpoints
pub const POINTER_MIN_VIEWPORT_PX: f64 = 1024.0; // no custom cursor / tilt at or below

// Debounce quiet periods
pub const SEARCH_DEBOUNCE_MS: i32 = 300;
pub const FAQ_DEBOUNCE_MS: i32 = 200;

// Search presentation
pub const SEARCH_RESULT_LIMIT: usize = 8;
pub const SEARCH_HIGHLIGHT_MS: i32 = 5000;

// Smooth-scroll anchor offset (fixed header height allowance)
pub const NAV_SCROLL_OFFSET_PX: f64 = 100.0;

// Intersection watcher geometry
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_MARGIN: &str = "50px";
pub const ACTIVE_NAV_THRESHOLD: f64 = 0.3;
pub const ACTIVE_NAV_MARGIN: &str = "-100px 0px";

// Loading screen
pub const LOADER_TICK_MS: i32 = 100;
pub const LOADER_MAX_STEP: f64 = 15.0;
pub const LOADER_HIDE_DELAY_MS: i32 = 500;

// Typewriter cadence
pub const TYPEWRITER_START_DELAY_MS: i32 = 1000;
pub const TYPEWRITER_BASE_DELAY_MS: i32 = 30;
pub const TYPEWRITER_JITTER_MS: i32 = 20;
pub const TYPEWRITER_CARET_HIDE_MS: i32 = 2000;

// Modal focus hand-off
pub const MODAL_FOCUS_DELAY_MS: i32 = 100;

// Toast notifications
pub const NOTIFY_SHOW_DELAY_MS: i32 = 100;
pub const NOTIFY_VISIBLE_MS: i32 = 3000;
pub const NOTIFY_ANIMATE_MS: i32 = 300;
pub const LIVE_REGION_CLEAR_MS: i32 = 1000;

// Card tilt
pub const TILT_DIVISOR: f64 = 10.0;

// Engagement idle polling
pub const IDLE_POLL_MS: i32 = 5000;

// Particle / link palette: fixed gold hue, alpha supplied per draw
pub const PARTICLE_RGB: (u8, u8, u8) = (212, 175, 55);

// Accessibility defaults restored by the reset control
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;
pub const DEFAULT_LINE_HEIGHT: f64 = 1.6;

// DOM contracts: selector groups treated as external markup hooks
pub const HOVER_SELECTOR: &str = "a, button, .premium-card, .faq-question, input, .nav-link";
pub const CARD_SELECTOR: &str = ".premium-card, .contradiction-card";
pub const REVEAL_SELECTOR: &str = ".premium-card, .contradiction-card, .premium-faq-item";
pub const SECTION_SELECTOR: &str = ".premium-section, .premium-hero";
pub const SEARCHABLE_SELECTOR: &str =
    ".card-title, .card-description, .section-title, .section-description, .faq-question h3, .answer-content p";
pub const PARALLAX_SELECTOR: &str = ".geometric-patterns, .floating-elements";
pub const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";
