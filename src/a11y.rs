use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{DEFAULT_FONT_SIZE_PX, DEFAULT_LINE_HEIGHT};
use crate::core::metrics::Metrics;
use crate::core::prefs::AccessibilityPrefs;
use crate::dom;
use crate::notify;
use crate::perf;
use crate::storage;

#[derive(Clone)]
pub struct A11yWiring {
    pub toggle: Option<web::Element>,
    pub panel: Option<web::Element>,
    pub close: Option<web::Element>,
    pub font_size: Option<web::HtmlInputElement>,
    pub line_height: Option<web::HtmlInputElement>,
    pub high_contrast: Option<web::HtmlInputElement>,
    pub reduce_motion: Option<web::HtmlInputElement>,
    pub reset: Option<web::Element>,
}

pub fn wire(document: &web::Document, w: A11yWiring, metrics: Rc<RefCell<Metrics>>) {
    if let (Some(toggle), Some(panel)) = (&w.toggle, &w.panel) {
        let panel_el = panel.clone();
        let metrics_panel = metrics.clone();
        dom::add_simple_listener(toggle, "click", move || {
            let showing = dom::has_class(&panel_el, "show");
            dom::set_class(&panel_el, "show", !showing);
            perf::track(&metrics_panel, "accessibility_panel_toggle", "");
        });
    }
    if let (Some(close), Some(panel)) = (&w.close, &w.panel) {
        let panel_el = panel.clone();
        dom::add_simple_listener(close, "click", move || {
            dom::remove_class(&panel_el, "show");
        });
    }

    wire_controls(document, &w);
    apply_saved(document, &w);
    wire_skip_link(document);
    wire_screen_reader_roles(document);
}

fn wire_controls(document: &web::Document, w: &A11yWiring) {
    if let Some(range) = &w.font_size {
        let range_el = range.clone();
        let doc = document.clone();
        dom::add_simple_listener(range, "input", move || {
            let value = range_el.value();
            if let Ok(size) = value.parse::<f64>() {
                apply_font_size(&doc, size);
                update_range_label(&range_el, &format!("{}px", value));
                merge_pref(|p| p.font_size = Some(size));
            }
        });
    }

    if let Some(range) = &w.line_height {
        let range_el = range.clone();
        dom::add_simple_listener(range, "input", move || {
            let value = range_el.value();
            if let Ok(height) = value.parse::<f64>() {
                apply_line_height(height);
                update_range_label(&range_el, &value);
                merge_pref(|p| p.line_height = Some(height));
            }
        });
    }

    if let Some(check) = &w.high_contrast {
        let check_el = check.clone();
        dom::add_simple_listener(check, "change", move || {
            let on = check_el.checked();
            set_body_class("high-contrast", on);
            merge_pref(|p| p.high_contrast = Some(on));
        });
    }

    if let Some(check) = &w.reduce_motion {
        let check_el = check.clone();
        dom::add_simple_listener(check, "change", move || {
            let on = check_el.checked();
            set_body_class("reduce-motion", on);
            merge_pref(|p| p.reduce_motion = Some(on));
        });
    }

    if let Some(reset) = &w.reset {
        let w_reset = w.clone();
        let doc = document.clone();
        dom::add_simple_listener(reset, "click", move || {
            reset_settings(&doc, &w_reset);
        });
    }
}

fn merge_pref(update: impl FnOnce(&mut AccessibilityPrefs)) {
    let mut prefs = storage::load_prefs();
    update(&mut prefs);
    storage::save_prefs(&prefs);
}

fn apply_font_size(document: &web::Document, size: f64) {
    if let Some(root) = document.document_element() {
        if let Some(h) = root.dyn_ref::<web::HtmlElement>() {
            dom::set_style(h, "font-size", &format!("{}px", size));
        }
    }
}

fn apply_line_height(height: f64) {
    if let Some(b) = dom::body() {
        dom::set_style(&b, "line-height", &height.to_string());
    }
}

fn set_body_class(class: &str, on: bool) {
    if let Some(b) = dom::body() {
        dom::set_class(&b, class, on);
    }
}

fn update_range_label(range: &web::HtmlInputElement, value: &str) {
    if let Some(label) = range
        .parent_element()
        .and_then(|p| p.query_selector(".range-value").ok().flatten())
    {
        label.set_text_content(Some(value));
    }
}

/// Re-apply the persisted record: each present field restores its control
/// value, style/class, and label.
fn apply_saved(document: &web::Document, w: &A11yWiring) {
    let prefs = storage::load_prefs();

    if let Some(size) = prefs.font_size {
        if let Some(range) = &w.font_size {
            range.set_value(&size.to_string());
            update_range_label(range, &format!("{}px", size));
        }
        apply_font_size(document, size);
    }
    if let Some(height) = prefs.line_height {
        if let Some(range) = &w.line_height {
            range.set_value(&height.to_string());
            update_range_label(range, &height.to_string());
        }
        apply_line_height(height);
    }
    if let Some(on) = prefs.high_contrast {
        if let Some(check) = &w.high_contrast {
            check.set_checked(on);
        }
        set_body_class("high-contrast", on);
    }
    if let Some(on) = prefs.reduce_motion {
        if let Some(check) = &w.reduce_motion {
            check.set_checked(on);
        }
        set_body_class("reduce-motion", on);
    }
}

fn reset_settings(document: &web::Document, w: &A11yWiring) {
    if let Some(root) = document.document_element() {
        if let Some(h) = root.dyn_ref::<web::HtmlElement>() {
            dom::clear_style(h, "font-size");
        }
    }
    if let Some(b) = dom::body() {
        dom::clear_style(&b, "line-height");
        dom::remove_class(&b, "high-contrast");
        dom::remove_class(&b, "reduce-motion");
    }

    if let Some(range) = &w.font_size {
        range.set_value(&DEFAULT_FONT_SIZE_PX.to_string());
        update_range_label(range, &format!("{}px", DEFAULT_FONT_SIZE_PX));
    }
    if let Some(range) = &w.line_height {
        range.set_value(&DEFAULT_LINE_HEIGHT.to_string());
        update_range_label(range, &DEFAULT_LINE_HEIGHT.to_string());
    }
    if let Some(check) = &w.high_contrast {
        check.set_checked(false);
    }
    if let Some(check) = &w.reduce_motion {
        check.set_checked(false);
    }

    storage::clear_prefs();
    notify::show(document, "Accessibility settings reset to defaults", notify::Kind::Success);
}

/// Inject a keyboard skip link ahead of all content.
fn wire_skip_link(document: &web::Document) {
    let Ok(link) = document.create_element("a") else {
        return;
    };
    let _ = link.set_attribute("href", "#mainContent");
    link.set_text_content(Some("Skip to main content"));
    let _ = link.set_attribute("class", "skip-link");

    let Ok(link) = link.dyn_into::<web::HtmlElement>() else {
        return;
    };
    link.style().set_css_text(
        "position: absolute; top: -40px; left: 6px; background: var(--color-accent); \
         color: var(--text-inverse); padding: 8px; text-decoration: none; \
         border-radius: 4px; z-index: 1000; transition: top 0.3s;",
    );

    {
        let link_focus = link.clone();
        dom::add_simple_listener(&link, "focus", move || {
            dom::set_style(&link_focus, "top", "6px");
        });
    }
    {
        let link_blur = link.clone();
        dom::add_simple_listener(&link, "blur", move || {
            dom::set_style(&link_blur, "top", "-40px");
        });
    }

    if let Some(b) = dom::body() {
        let _ = b.insert_before(&link, b.first_child().as_ref());
    }
}

/// Cards become labelled, focusable articles for screen readers.
fn wire_screen_reader_roles(document: &web::Document) {
    for card in dom::query_all(document, crate::constants::CARD_SELECTOR) {
        let _ = card.set_attribute("role", "article");
        let _ = card.set_attribute("tabindex", "0");
        if let Some(title) = card
            .query_selector(".card-title")
            .ok()
            .flatten()
            .and_then(|el| el.text_content())
        {
            let _ = card.set_attribute("aria-label", &format!("Card: {}", title));
        }
    }
}
