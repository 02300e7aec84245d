use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::NAV_SCROLL_OFFSET_PX;
use crate::core::metrics::Metrics;
use crate::core::prefs::Theme;
use crate::dom;
use crate::perf;
use crate::storage;

#[derive(Clone)]
pub struct NavWiring {
    pub mobile_toggle: Option<web::Element>,
    pub mobile_menu: Option<web::Element>,
    pub mobile_menu_close: Option<web::Element>,
    pub theme_toggle: Option<web::Element>,
    pub mobile_theme_toggle: Option<web::Element>,
}

pub fn apply_theme(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Mark the nav link whose href matches `target_id` active; clears the rest.
pub fn set_active_link(document: &web::Document, target_id: &str) {
    for link in dom::query_all(document, ".nav-link") {
        let is_match = link.get_attribute("href").as_deref() == Some(target_id);
        dom::set_class(&link, "active", is_match);
    }
}

fn close_mobile_menu(w: &NavWiring) {
    if let Some(menu) = &w.mobile_menu {
        dom::remove_class(menu, "show");
    }
    if let Some(toggle) = &w.mobile_toggle {
        dom::remove_class(toggle, "active");
    }
    dom::lock_body_scroll(false);
}

pub fn wire(document: &web::Document, w: NavWiring, metrics: Rc<RefCell<Metrics>>) {
    // Mobile menu open/close
    if let (Some(toggle), Some(menu)) = (&w.mobile_toggle, &w.mobile_menu) {
        let toggle_el = toggle.clone();
        let menu_el = menu.clone();
        let metrics_toggle = metrics.clone();
        dom::add_simple_listener(toggle, "click", move || {
            let is_open = !dom::has_class(&menu_el, "show");
            dom::set_class(&menu_el, "show", is_open);
            dom::set_class(&toggle_el, "active", is_open);
            dom::lock_body_scroll(is_open);
            perf::track(&metrics_toggle, "mobile_menu_toggle", "");
        });
    }

    if let (Some(close), Some(_)) = (&w.mobile_menu_close, &w.mobile_menu) {
        let w_close = w.clone();
        dom::add_simple_listener(close, "click", move || {
            close_mobile_menu(&w_close);
        });
    }

    // Dismiss the mobile menu on outside clicks
    if w.mobile_menu.is_some() {
        let w_outside = w.clone();
        dom::add_listener(document, "click", move |ev: web::MouseEvent| {
            let Some(menu) = &w_outside.mobile_menu else {
                return;
            };
            if !dom::has_class(menu, "show") {
                return;
            }
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok()) else {
                return;
            };
            let inside_menu = menu.contains(Some(&target));
            let inside_toggle = w_outside
                .mobile_toggle
                .as_ref()
                .map(|t| t.contains(Some(&target)))
                .unwrap_or(false);
            if !inside_menu && !inside_toggle {
                close_mobile_menu(&w_outside);
            }
        });
    }

    // Smooth-scrolling nav links
    for link in dom::query_all(document, ".nav-link, .mobile-nav-link") {
        let link_el = link.clone();
        let doc = document.clone();
        let w_link = w.clone();
        let metrics_link = metrics.clone();
        dom::add_listener(&link, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(href) = link_el.get_attribute("href") else {
                return;
            };
            let Ok(Some(section)) = doc.query_selector(&href) else {
                return;
            };
            dom::scroll_to_element(&section, NAV_SCROLL_OFFSET_PX);
            if w_link
                .mobile_menu
                .as_ref()
                .map(|m| dom::has_class(m, "show"))
                .unwrap_or(false)
            {
                close_mobile_menu(&w_link);
            }
            set_active_link(&doc, &href);
            perf::track(&metrics_link, "navigation", &href);
        });
    }

    // Theme toggles (desktop + mobile)
    for toggle in [&w.theme_toggle, &w.mobile_theme_toggle].into_iter().flatten() {
        let doc = document.clone();
        let metrics_theme = metrics.clone();
        dom::add_simple_listener(toggle, "click", move || {
            let current = doc
                .document_element()
                .and_then(|e| e.get_attribute("data-theme"))
                .map(|name| Theme::from_name(&name))
                .unwrap_or(Theme::Dark);
            let next = current.toggled();
            apply_theme(&doc, next);
            storage::save_theme(next);
            perf::track(&metrics_theme, "theme_toggle", next.as_str());
        });
    }
}
