use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{
    ACTIVE_NAV_MARGIN, ACTIVE_NAV_THRESHOLD, REVEAL_MARGIN, REVEAL_THRESHOLD, SECTION_SELECTOR,
    REVEAL_SELECTOR,
};
use crate::core::counter::{format_grouped, CountUp};
use crate::dom;
use crate::frame;
use crate::nav;

/// Build an intersection observer over a shared callback. The closure leaks,
/// like every other page-lifetime listener.
fn observer(
    mut callback: impl FnMut(Vec<web::IntersectionObserverEntry>, web::IntersectionObserver) + 'static,
    threshold: f64,
    margin: Option<&str>,
) -> Option<web::IntersectionObserver> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, obs: web::IntersectionObserver| {
            let list = entries
                .iter()
                .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                .collect();
            callback(list, obs);
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(m) = margin {
        init.set_root_margin(m);
    }
    let obs =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init).ok()?;
    closure.forget();
    Some(obs)
}

/// One-shot fade-in reveals: prime each element hidden, then set its
/// terminal opacity/transform on first visibility and stop observing it.
pub fn wire_reveals(document: &web::Document) {
    let elements = dom::query_all(document, REVEAL_SELECTOR);
    if elements.is_empty() {
        return;
    }
    for el in &elements {
        if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
            dom::set_style(h, "opacity", "0");
            dom::set_style(h, "transform", "translateY(30px)");
            dom::set_style(h, "transition", "opacity 0.6s ease, transform 0.6s ease");
        }
    }

    let Some(obs) = observer(
        |entries, obs| {
            for entry in entries {
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(h) = target.dyn_ref::<web::HtmlElement>() {
                    dom::set_style(h, "opacity", "1");
                    dom::set_style(h, "transform", "translateY(0)");
                }
                obs.unobserve(&target);
            }
        },
        REVEAL_THRESHOLD,
        Some(REVEAL_MARGIN),
    ) else {
        return;
    };
    for el in &elements {
        obs.observe(el);
    }
}

/// Stat counters: first visibility starts a linear count-up to the
/// element's data-target, then the element is never observed again.
pub fn wire_counters(document: &web::Document) {
    let counters = dom::query_all(document, ".stat-number");
    if counters.is_empty() {
        return;
    }

    let Some(obs) = observer(
        |entries, obs| {
            for entry in entries {
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                obs.unobserve(&target);
                let Some(goal) = dom::dataset_get(&target, "target").and_then(|t| t.parse::<f64>().ok())
                else {
                    continue;
                };
                if let Ok(el) = target.dyn_into::<web::HtmlElement>() {
                    start_count_up(el, goal);
                }
            }
        },
        0.0,
        None,
    ) else {
        return;
    };
    for el in &counters {
        obs.observe(el);
    }
}

fn start_count_up(el: web::HtmlElement, goal: f64) {
    let mut counter = CountUp::with_defaults(goal);
    frame::run_frames_while(move || {
        let (value, done) = counter.step();
        el.set_text_content(Some(&format_grouped(value.max(0.0) as u64)));
        !done
    });
}

/// Active-section detection: re-fires on every crossing of the visibility
/// threshold and overwrites the active nav link. Last write wins; ordering
/// within a batch is deliberately unspecified.
pub fn wire_active_nav(document: &web::Document) {
    let sections: Vec<web::Element> = dom::query_all(document, SECTION_SELECTOR)
        .into_iter()
        .filter(|s| !s.id().is_empty())
        .collect();
    if sections.is_empty() {
        return;
    }

    let doc = document.clone();
    let Some(obs) = observer(
        move |entries, _obs| {
            for entry in entries {
                if entry.is_intersecting() {
                    let target_id = format!("#{}", entry.target().id());
                    nav::set_active_link(&doc, &target_id);
                }
            }
        },
        ACTIVE_NAV_THRESHOLD,
        Some(ACTIVE_NAV_MARGIN),
    ) else {
        return;
    };
    for section in &sections {
        obs.observe(section);
    }
}
