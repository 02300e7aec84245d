use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::modal;

/// Overlays the global Escape handler can dismiss.
pub struct EscapeTargets {
    pub modal_overlay: Option<web::Element>,
    pub a11y_panel: Option<web::Element>,
    pub mobile_menu: Option<web::Element>,
    pub mobile_toggle: Option<web::Element>,
}

pub fn wire_global_keydown(document: &web::Document, targets: EscapeTargets) {
    let doc = document.clone();
    dom::add_listener(document, "keydown", move |ev: web::KeyboardEvent| {
        match ev.key().as_str() {
            "Escape" => handle_escape(&targets),
            "ArrowDown" => handle_faq_arrow(&doc, &ev, 1),
            "ArrowUp" => handle_faq_arrow(&doc, &ev, -1),
            _ => {}
        }
    });
}

fn handle_escape(targets: &EscapeTargets) {
    if let Some(overlay) = &targets.modal_overlay {
        if dom::has_class(overlay, "show") {
            modal::close_overlay(overlay);
        }
    }
    if let Some(panel) = &targets.a11y_panel {
        if dom::has_class(panel, "show") {
            dom::remove_class(panel, "show");
        }
    }
    if let Some(menu) = &targets.mobile_menu {
        if dom::has_class(menu, "show") {
            dom::remove_class(menu, "show");
            if let Some(toggle) = &targets.mobile_toggle {
                dom::remove_class(toggle, "active");
            }
            dom::lock_body_scroll(false);
        }
    }
}

/// Move focus between FAQ questions with the arrow keys when the event
/// originated inside an FAQ item.
fn handle_faq_arrow(document: &web::Document, ev: &web::KeyboardEvent, step: i32) {
    let Some(origin) = ev
        .target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(".premium-faq-item").ok().flatten())
    else {
        return;
    };

    let items = dom::query_all(document, ".premium-faq-item");
    let Some(index) = items.iter().position(|item| *item == origin) else {
        return;
    };
    let next = index as i32 + step;
    if next < 0 || next as usize >= items.len() {
        return;
    }
    if let Some(question) = items[next as usize]
        .query_selector(".faq-question")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        ev.prevent_default();
        let _ = question.focus();
    }
}
