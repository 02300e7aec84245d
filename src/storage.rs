use web_sys as web;

use crate::core::prefs::{AccessibilityPrefs, Theme};

const THEME_KEY: &str = "theme";
const PREFS_KEY: &str = "accessibilityPreferences";

fn local_storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok().flatten()
}

pub fn load_theme() -> Theme {
    local_storage()
        .and_then(|s| s.get_item(THEME_KEY).ok().flatten())
        .map(|name| Theme::from_name(&name))
        .unwrap_or(Theme::Dark)
}

pub fn save_theme(theme: Theme) {
    if let Some(s) = local_storage() {
        let _ = s.set_item(THEME_KEY, theme.as_str());
    }
}

pub fn load_prefs() -> AccessibilityPrefs {
    local_storage()
        .and_then(|s| s.get_item(PREFS_KEY).ok().flatten())
        .map(|raw| AccessibilityPrefs::parse(&raw))
        .unwrap_or_default()
}

pub fn save_prefs(prefs: &AccessibilityPrefs) {
    if let Some(s) = local_storage() {
        let _ = s.set_item(PREFS_KEY, &prefs.to_json());
    }
}

pub fn clear_prefs() {
    if let Some(s) = local_storage() {
        let _ = s.remove_item(PREFS_KEY);
    }
}
