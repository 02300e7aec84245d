use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    LIVE_REGION_CLEAR_MS, NOTIFY_ANIMATE_MS, NOTIFY_SHOW_DELAY_MS, NOTIFY_VISIBLE_MS,
};
use crate::dom;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
    Info,
}

impl Kind {
    fn class_suffix(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Info => "info",
        }
    }
}

/// Create the polite live region announcements are mirrored into. Looked up
/// by class afterwards, so no handle needs to be carried around.
pub fn init(document: &web::Document) {
    let Ok(region) = document.create_element("div") else {
        return;
    };
    let _ = region.set_attribute("aria-live", "polite");
    let _ = region.set_attribute("aria-atomic", "true");
    let _ = region.set_attribute("class", "sr-only sr-live-region");
    if let Some(h) = region.dyn_ref::<web::HtmlElement>() {
        h.style().set_css_text(
            "position: absolute; width: 1px; height: 1px; padding: 0; margin: -1px; \
             overflow: hidden; clip: rect(0, 0, 0, 0); white-space: nowrap; border: 0;",
        );
    }
    if let Some(b) = dom::body() {
        let _ = b.append_child(&region);
    }
}

/// Transient toast: slides in, holds, slides out, removes itself. The
/// message is also announced to screen readers.
pub fn show(document: &web::Document, message: &str, kind: Kind) {
    let Ok(el) = document.create_element("div") else {
        return;
    };
    let _ = el.set_attribute(
        "class",
        &format!("notification notification-{}", kind.class_suffix()),
    );
    el.set_text_content(Some(message));

    let Ok(toast) = el.dyn_into::<web::HtmlElement>() else {
        return;
    };
    toast.style().set_css_text(&format!(
        "position: fixed; top: 20px; right: 20px; background: var(--color-{}); \
         color: white; padding: 16px 24px; border-radius: 8px; \
         box-shadow: var(--shadow-lg); z-index: var(--z-toast); \
         transform: translateX(100%); transition: transform 0.3s ease;",
        kind.class_suffix()
    ));

    if let Some(b) = dom::body() {
        let _ = b.append_child(&toast);
    }

    {
        let toast = toast.clone();
        dom::set_timeout(
            move || dom::set_style(&toast, "transform", "translateX(0)"),
            NOTIFY_SHOW_DELAY_MS,
        );
    }
    {
        let toast = toast.clone();
        dom::set_timeout(
            move || {
                dom::set_style(&toast, "transform", "translateX(100%)");
                let toast = toast.clone();
                dom::set_timeout(move || toast.remove(), NOTIFY_ANIMATE_MS);
            },
            NOTIFY_VISIBLE_MS,
        );
    }

    announce(document, message);
}

pub fn announce(document: &web::Document, message: &str) {
    let Ok(Some(region)) = document.query_selector(".sr-live-region") else {
        return;
    };
    region.set_text_content(Some(message));
    dom::set_timeout(
        move || region.set_text_content(Some("")),
        LIVE_REGION_CLEAR_MS,
    );
}
