#![cfg(target_arch = "wasm32")]
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod a11y;
mod constants;
mod core;
mod dom;
mod events;
mod faq;
mod filters;
mod forms;
mod frame;
mod loader;
mod modal;
mod nav;
mod notify;
mod observe;
mod perf;
mod render;
mod search;
mod share;
mod storage;

use crate::core::metrics::Metrics;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("purepath-web starting");

    if let Err(e) = init() {
        // Features wired before the failure stay active; no retry.
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Resolve every UI hook once; each subsystem receives only the handles
    // it needs, and a missing hook disables just that feature.
    let hooks = dom::Hooks::resolve(&document);
    let metrics = Rc::new(RefCell::new(Metrics::default()));
    metrics.borrow_mut().load_time_ms = window.performance().map(|p| p.now()).unwrap_or(0.0);

    nav::apply_theme(&document, storage::load_theme());
    notify::init(&document);

    // Loading screen; the typewriter and stat counters start once it hides.
    {
        let doc = document.clone();
        let typewriter = hooks.typewriter.clone();
        let caret = hooks.typewriter_caret.clone();
        loader::wire(
            loader::LoaderWiring {
                loader: hooks.loader.clone(),
                bar: hooks.loader_bar.clone(),
            },
            move || {
                if let Some(el) = typewriter {
                    loader::start_typewriter(el, caret);
                }
                observe::wire_counters(&doc);
            },
        );
    }

    // Background particle field
    if let Some(canvas) = hooks.particle_canvas.clone() {
        frame::start_particle_loop(canvas);
    }

    // Custom cursor, precise-pointer viewports only
    let (viewport_width, _) = dom::viewport_size();
    if viewport_width > constants::POINTER_MIN_VIEWPORT_PX {
        if let (Some(dot), Some(ring)) = (hooks.cursor_dot.clone(), hooks.cursor_ring.clone()) {
            let raw = Rc::new(RefCell::new(Vec2::ZERO));
            events::pointer::wire_pointer_tracking(&document, raw.clone());
            events::pointer::wire_hover_classes(&document);
            frame::start_cursor_loop(dot, ring, raw);
        }
    }

    // Scroll-driven state, reveals, active-section detection
    events::scroll::wire(
        &document,
        events::scroll::ScrollWiring::from_hooks(&document, &hooks),
        metrics.clone(),
    );
    observe::wire_reveals(&document);
    observe::wire_active_nav(&document);

    nav::wire(
        &document,
        nav::NavWiring {
            mobile_toggle: hooks.mobile_toggle.clone(),
            mobile_menu: hooks.mobile_menu.clone(),
            mobile_menu_close: hooks.mobile_menu_close.clone(),
            theme_toggle: hooks.theme_toggle.clone(),
            mobile_theme_toggle: hooks.mobile_theme_toggle.clone(),
        },
        metrics.clone(),
    );

    search::wire(
        &document,
        search::SearchWiring {
            input: hooks.search_input.clone(),
            button: hooks.search_btn.clone(),
            suggestions: hooks.search_suggestions.clone(),
            faq_search: hooks.faq_search.clone(),
        },
        metrics.clone(),
    );

    modal::wire(
        &document,
        modal::ModalWiring {
            overlay: hooks.modal_overlay.clone(),
            title: hooks.modal_title.clone(),
            content: hooks.modal_content.clone(),
            close: hooks.modal_close.clone(),
        },
        metrics.clone(),
    );

    faq::wire(&document, metrics.clone());
    filters::wire(
        &document,
        filters::FilterWiring {
            sort_btn: hooks.sort_btn.clone(),
            sort_options: hooks.sort_options.clone(),
            cards_grid: hooks.cards_grid.clone(),
        },
        metrics.clone(),
    );

    a11y::wire(
        &document,
        a11y::A11yWiring {
            toggle: hooks.a11y_toggle.clone(),
            panel: hooks.a11y_panel.clone(),
            close: hooks.a11y_close.clone(),
            font_size: hooks.font_size.clone(),
            line_height: hooks.line_height.clone(),
            high_contrast: hooks.high_contrast.clone(),
            reduce_motion: hooks.reduce_motion.clone(),
            reset: hooks.a11y_reset.clone(),
        },
        metrics.clone(),
    );

    forms::wire(&document, hooks.newsletter_form.clone(), metrics.clone());
    events::pointer::wire_card_tilt(&document);
    events::keyboard::wire_global_keydown(
        &document,
        events::keyboard::EscapeTargets {
            modal_overlay: hooks.modal_overlay.clone(),
            a11y_panel: hooks.a11y_panel.clone(),
            mobile_menu: hooks.mobile_menu.clone(),
            mobile_toggle: hooks.mobile_toggle.clone(),
        },
    );

    perf::start_fps_monitor();
    perf::wire_web_vitals();
    perf::wire_engagement(&document);
    perf::wire_page_lifecycle(&document);

    perf::log_summary(&metrics, "site fully initialized");
    Ok(())
}
