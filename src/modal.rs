use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{FOCUSABLE_SELECTOR, MODAL_FOCUS_DELAY_MS};
use crate::core::content::modal_entry;
use crate::core::metrics::Metrics;
use crate::dom;
use crate::perf;

#[derive(Clone)]
pub struct ModalWiring {
    pub overlay: Option<web::Element>,
    pub title: Option<web::Element>,
    pub content: Option<web::HtmlElement>,
    pub close: Option<web::Element>,
}

pub fn wire(document: &web::Document, w: ModalWiring, metrics: Rc<RefCell<Metrics>>) {
    // data-modal triggers
    for trigger in dom::query_all(document, "[data-modal]") {
        let trigger_el = trigger.clone();
        let w_open = w.clone();
        let metrics_open = metrics.clone();
        dom::add_listener(&trigger, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(key) = dom::dataset_get(&trigger_el, "modal") else {
                return;
            };
            open(&w_open, &key);
            perf::track(&metrics_open, "modal_open", &key);
        });
    }

    if let (Some(close), Some(overlay)) = (&w.close, &w.overlay) {
        let overlay_el = overlay.clone();
        dom::add_simple_listener(close, "click", move || {
            close_overlay(&overlay_el);
        });
    }

    // Backdrop click closes only when the overlay itself was hit
    if let Some(overlay) = &w.overlay {
        let overlay_el = overlay.clone();
        dom::add_listener(overlay, "click", move |ev: web::MouseEvent| {
            let overlay_js: JsValue = overlay_el.clone().into();
            if ev.target().map(JsValue::from) == Some(overlay_js) {
                close_overlay(&overlay_el);
            }
        });
    }
}

/// Fill and show the modal; scroll locks and initial focus moves to the
/// first focusable element inside the body.
pub fn open(w: &ModalWiring, key: &str) {
    let Some(data) = modal_entry(key) else {
        return;
    };
    let (Some(overlay), Some(title), Some(content)) = (&w.overlay, &w.title, &w.content) else {
        return;
    };

    title.set_text_content(Some(data.title));
    content.set_inner_html(data.body);
    dom::add_class(overlay, "show");
    dom::lock_body_scroll(true);

    if let Ok(Some(first)) = content.query_selector(FOCUSABLE_SELECTOR) {
        if let Ok(focusable) = first.dyn_into::<web::HtmlElement>() {
            dom::set_timeout(
                move || {
                    let _ = focusable.focus();
                },
                MODAL_FOCUS_DELAY_MS,
            );
        }
    }
}

pub fn close_overlay(overlay: &web::Element) {
    dom::remove_class(overlay, "show");
    dom::lock_body_scroll(false);
    log::info!("[interaction] action=modal_close");
}
