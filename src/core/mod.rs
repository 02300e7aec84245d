// Pure derivation logic: no web_sys imports anywhere under core/, so these
// modules are host-testable (see tests/) while the crate itself is wasm-only.

pub mod constants;
pub mod content;
pub mod counter;
pub mod cursor;
pub mod debounce;
pub mod forms;
pub mod metrics;
pub mod particles;
pub mod prefs;
pub mod scroll;
pub mod search;
