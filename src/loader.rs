use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    LOADER_HIDE_DELAY_MS, LOADER_MAX_STEP, LOADER_TICK_MS, TYPEWRITER_BASE_DELAY_MS,
    TYPEWRITER_CARET_HIDE_MS, TYPEWRITER_JITTER_MS, TYPEWRITER_START_DELAY_MS,
};
use crate::dom;

const TYPEWRITER_TEXT: &str = "And We have sent down to you the Book as a clarification for all \
                               things, and as a guidance and mercy and good tidings for those who \
                               have submitted.";

#[derive(Clone)]
pub struct LoaderWiring {
    pub loader: Option<web::HtmlElement>,
    pub bar: Option<web::HtmlElement>,
}

/// Simulated loading progress: random increments every tick, capped at 100.
/// Once full, the interval stops and after a short delay the loader hides,
/// body scroll unlocks, and `on_complete` runs (typewriter + counters).
pub fn wire(w: LoaderWiring, on_complete: impl FnOnce() + 'static) {
    let Some(loader) = w.loader else {
        return;
    };

    let progress = Rc::new(RefCell::new(0.0_f64));
    let interval_id: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    let completion: Rc<RefCell<Option<Box<dyn FnOnce()>>>> =
        Rc::new(RefCell::new(Some(Box::new(on_complete))));

    let bar = w.bar.clone();
    let interval_for_tick = interval_id.clone();
    let id = dom::set_interval(
        move || {
            let mut p = progress.borrow_mut();
            *p = (*p + rand::thread_rng().gen_range(0.0..LOADER_MAX_STEP)).min(100.0);
            if let Some(bar) = &bar {
                dom::set_style(bar, "width", &format!("{:.0}%", *p));
            }
            if *p < 100.0 {
                return;
            }
            if let Some(id) = interval_for_tick.borrow_mut().take() {
                dom::clear_interval(id);
            }
            let loader = loader.clone();
            let completion = completion.clone();
            dom::set_timeout(
                move || {
                    dom::add_class(&loader, "hidden");
                    dom::lock_body_scroll(false);
                    if let Some(f) = completion.borrow_mut().take() {
                        f();
                    }
                },
                LOADER_HIDE_DELAY_MS,
            );
        },
        LOADER_TICK_MS,
    );
    *interval_id.borrow_mut() = id;
}

/// Type the fixed sentence one character at a time with jittered cadence,
/// then hide the caret once finished.
pub fn start_typewriter(element: web::HtmlElement, caret: Option<web::HtmlElement>) {
    let chars: Vec<char> = TYPEWRITER_TEXT.chars().collect();
    let index = Rc::new(RefCell::new(0_usize));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let i = *index.borrow();
        if i < chars.len() {
            let mut text = element.text_content().unwrap_or_default();
            text.push(chars[i]);
            element.set_text_content(Some(&text));
            *index.borrow_mut() = i + 1;

            let delay =
                TYPEWRITER_BASE_DELAY_MS + rand::thread_rng().gen_range(0..TYPEWRITER_JITTER_MS);
            if let (Some(win), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
                let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    delay,
                );
            }
        } else {
            if let Some(caret) = caret.clone() {
                dom::set_timeout(
                    move || dom::set_style(&caret, "display", "none"),
                    TYPEWRITER_CARET_HIDE_MS,
                );
            }
            tick_clone.borrow_mut().take();
        }
    }) as Box<dyn FnMut()>));

    if let (Some(win), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            TYPEWRITER_START_DELAY_MS,
        );
    }
}
