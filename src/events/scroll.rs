use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::metrics::Metrics;
use crate::core::scroll::{derive_view, parallax_offset, reading_progress, FrameGate, ScrollSample};
use crate::dom::{self, Hooks};
use crate::perf;
use crate::share;

/// Handles the scroll aggregator drives. All are optional; a missing hook
/// just skips that derived effect.
#[derive(Clone)]
pub struct ScrollWiring {
    pub header: Option<web::Element>,
    pub scroll_progress: Option<web::HtmlElement>,
    pub reading_progress: Option<web::HtmlElement>,
    pub back_to_top: Option<web::Element>,
    pub share_btn: Option<web::Element>,
    pub main_content: Option<web::Element>,
    pub parallax_layers: Vec<web::HtmlElement>,
}

impl ScrollWiring {
    pub fn from_hooks(document: &web::Document, hooks: &Hooks) -> Self {
        let parallax_layers = dom::query_all(document, crate::constants::PARALLAX_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect();
        Self {
            header: hooks.header.clone(),
            scroll_progress: hooks.scroll_progress.clone(),
            reading_progress: hooks.reading_progress.clone(),
            back_to_top: hooks.back_to_top.clone(),
            share_btn: hooks.share_btn.clone(),
            main_content: hooks.main_content.clone(),
            parallax_layers,
        }
    }
}

/// Wire the coalesced scroll pipeline: native scroll events request at most
/// one animation-frame recomputation; excess events within a frame drop.
pub fn wire(document: &web::Document, w: ScrollWiring, metrics: Rc<RefCell<Metrics>>) {
    let Some(window) = web::window() else {
        return;
    };

    let gate = Rc::new(RefCell::new(FrameGate::default()));
    let prev_offset = Rc::new(RefCell::new(window.page_y_offset().unwrap_or(0.0)));

    // Persistent frame callback, re-requested per processed scroll event.
    let update: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let gate = gate.clone();
        let prev_offset = prev_offset.clone();
        let metrics = metrics.clone();
        let w = w.clone();
        *update.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            gate.borrow_mut().complete();
            apply_scroll_state(&w, &prev_offset, &metrics);
        }) as Box<dyn FnMut()>));
    }

    {
        let gate = gate.clone();
        let update = update.clone();
        let win = window.clone();
        dom::add_simple_listener(&window, "scroll", move || {
            if !gate.borrow_mut().request() {
                return;
            }
            if let Some(cb) = update.borrow().as_ref() {
                _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        });
    }

    if let Some(back_to_top) = &w.back_to_top {
        let metrics = metrics.clone();
        dom::add_simple_listener(back_to_top, "click", move || {
            dom::smooth_scroll_to(0.0);
            perf::track(&metrics, "back_to_top", "");
        });
    }

    if let Some(share_btn) = &w.share_btn {
        let metrics = metrics.clone();
        let document = document.clone();
        dom::add_simple_listener(share_btn, "click", move || {
            share::share_page(document.clone());
            perf::track(&metrics, "share", "");
        });
    }
}

fn apply_scroll_state(w: &ScrollWiring, prev_offset: &Rc<RefCell<f64>>, metrics: &Rc<RefCell<Metrics>>) {
    let Some(win) = web::window() else {
        return;
    };
    let offset = win.page_y_offset().unwrap_or(0.0);
    let viewport_height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let document_height = win
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);

    let view = derive_view(ScrollSample {
        offset,
        prev_offset: *prev_offset.borrow(),
        document_height,
        viewport_height,
    });

    if let Some(header) = &w.header {
        dom::set_class(header, "hidden", view.header_hidden);
        dom::set_class(header, "scrolled", view.header_scrolled);
    }
    if let Some(bar) = &w.scroll_progress {
        dom::set_style(bar, "transform", &format!("scaleX({:.4})", view.page_progress));
    }
    if let (Some(bar), Some(main)) = (&w.reading_progress, &w.main_content) {
        let rect = main.get_bounding_client_rect();
        let progress = reading_progress(viewport_height, rect.top(), rect.height());
        dom::set_style(bar, "transform", &format!("scaleX({:.4})", progress));
    }
    if let Some(btn) = &w.back_to_top {
        dom::set_class(btn, "visible", view.floating_visible);
    }
    if let Some(btn) = &w.share_btn {
        dom::set_class(btn, "visible", view.floating_visible);
    }
    for (i, layer) in w.parallax_layers.iter().enumerate() {
        dom::set_style(
            layer,
            "transform",
            &format!("translateY({:.2}px)", parallax_offset(offset, i)),
        );
    }

    metrics.borrow_mut().scroll_events += 1;
    *prev_offset.borrow_mut() = offset;
}
