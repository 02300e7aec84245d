use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::IDLE_POLL_MS;
use crate::core::constants::{FPS_WARN_THRESHOLD, IDLE_TIMEOUT_MS};
use crate::core::metrics::{Engagement, FpsMonitor, Metrics};
use crate::dom;
use crate::frame;

/// Structured interaction log plus the running counter.
pub fn track(metrics: &Rc<RefCell<Metrics>>, action: &str, detail: &str) {
    metrics.borrow_mut().interaction_count += 1;
    if detail.is_empty() {
        log::info!("[interaction] action={}", action);
    } else {
        log::info!("[interaction] action={} detail={}", action, detail);
    }
}

pub fn log_summary(metrics: &Rc<RefCell<Metrics>>, message: &str) {
    let m = *metrics.borrow();
    log::info!(
        "[perf] {}: load_time_ms={:.0} interactions={} scroll_events={}",
        message,
        m.load_time_ms,
        m.interaction_count,
        m.scroll_events
    );
}

/// Dedicated frame loop counting frames per rolling second; warns on sags.
pub fn start_fps_monitor() {
    let started = Instant::now();
    let mut monitor = FpsMonitor::new(0.0);
    frame::run_frames(move || {
        let now_ms = started.elapsed().as_secs_f64() * 1000.0;
        if let Some(fps) = monitor.tick(now_ms) {
            if fps < FPS_WARN_THRESHOLD {
                log::warn!("[perf] low frame rate: {} fps", fps);
            }
        }
    });
}

/// Web-vitals observers. Entry fields beyond the base PerformanceEntry are
/// read reflectively to keep the binding surface small; missing
/// PerformanceObserver support disables the whole block silently.
pub fn wire_web_vitals() {
    let Some(window) = web::window() else {
        return;
    };
    if !js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("PerformanceObserver"))
        .unwrap_or(false)
    {
        return;
    }

    // Largest Contentful Paint: last entry of each batch wins
    observe_entries("largest-contentful-paint", |entries| {
        if let Some(last) = entries.last() {
            log::info!("[vitals] lcp_ms={:.0}", last.start_time());
        }
    });

    // First Input Delay: processingStart - startTime
    observe_entries("first-input", |entries| {
        for entry in entries {
            let processing_start =
                js_sys::Reflect::get(entry.as_ref(), &JsValue::from_str("processingStart"))
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(entry.start_time());
            log::info!("[vitals] fid_ms={:.1}", processing_start - entry.start_time());
        }
    });

    // Cumulative Layout Shift: sum of non-input-driven shift values
    let cls = Rc::new(RefCell::new(0.0_f64));
    observe_entries("layout-shift", move |entries| {
        for entry in entries {
            let had_input =
                js_sys::Reflect::get(entry.as_ref(), &JsValue::from_str("hadRecentInput"))
                    .ok()
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false);
            if !had_input {
                let value = js_sys::Reflect::get(entry.as_ref(), &JsValue::from_str("value"))
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                *cls.borrow_mut() += value;
            }
        }
        log::info!("[vitals] cls={:.4}", cls.borrow());
    });
}

fn observe_entries(entry_type: &str, mut callback: impl FnMut(Vec<web::PerformanceEntry>) + 'static) {
    let closure = Closure::wrap(Box::new(
        move |list: web::PerformanceObserverEntryList, _obs: web::PerformanceObserver| {
            let entries = list
                .get_entries()
                .iter()
                .filter_map(|e| e.dyn_into::<web::PerformanceEntry>().ok())
                .collect();
            callback(entries);
        },
    )
        as Box<dyn FnMut(web::PerformanceObserverEntryList, web::PerformanceObserver)>);

    if let Ok(observer) = web::PerformanceObserver::new(closure.as_ref().unchecked_ref()) {
        let entry_types = js_sys::Array::of1(&JsValue::from_str(entry_type));
        let init = web::PerformanceObserverInit::new(&entry_types);
        let _ = observer.observe(&init);
        closure.forget();
    }
}

/// Activity events keep the session active; a quiet half minute marks it
/// idle. Total active time is logged on unload.
pub fn wire_engagement(document: &web::Document) {
    let started = Instant::now();
    let engagement = Rc::new(RefCell::new(Engagement::new(0.0)));

    for kind in ["mousedown", "mousemove", "keypress", "scroll", "touchstart"] {
        let engagement = engagement.clone();
        let started_ev = started;
        dom::add_simple_listener(document, kind, move || {
            engagement
                .borrow_mut()
                .touch(started_ev.elapsed().as_secs_f64() * 1000.0);
        });
    }

    {
        let engagement = engagement.clone();
        let started_poll = started;
        let _ = dom::set_interval(
            move || {
                let now_ms = started_poll.elapsed().as_secs_f64() * 1000.0;
                if engagement.borrow_mut().idle_check(now_ms, IDLE_TIMEOUT_MS) {
                    log::info!("[perf] session idle");
                }
            },
            IDLE_POLL_MS,
        );
    }

    if let Some(window) = web::window() {
        let engagement = engagement.clone();
        dom::add_simple_listener(&window, "beforeunload", move || {
            let now_ms = started.elapsed().as_secs_f64() * 1000.0;
            log::info!(
                "[perf] time on page: {:.0}s",
                engagement.borrow().active_secs(now_ms)
            );
        });
    }
}

/// Page lifecycle: a hidden tab gets a body class other effects may consult;
/// connectivity changes are logged.
pub fn wire_page_lifecycle(document: &web::Document) {
    {
        let doc = document.clone();
        dom::add_simple_listener(document, "visibilitychange", move || {
            if let Some(b) = doc.body() {
                dom::set_class(&b, "page-hidden", doc.hidden());
            }
        });
    }

    if let Some(window) = web::window() {
        dom::add_simple_listener(&window, "online", || {
            log::info!("[perf] connection restored");
        });
        dom::add_simple_listener(&window, "offline", || {
            log::warn!("[perf] connection lost");
        });
    }
}
