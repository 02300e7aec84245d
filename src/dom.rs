use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn body() -> Option<web::HtmlElement> {
    window_document().and_then(|d| d.body())
}

pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

#[inline]
pub fn by_id(document: &web::Document, id: &str) -> Option<web::Element> {
    document.get_element_by_id(id)
}

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    by_id(document, id).and_then(|el| el.dyn_into().ok())
}

#[inline]
pub fn input_by_id(document: &web::Document, id: &str) -> Option<web::HtmlInputElement> {
    by_id(document, id).and_then(|el| el.dyn_into().ok())
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Attach a typed event listener and leak the closure: listeners live for
/// the page lifetime, matching the wiring-once model.
pub fn add_listener<E>(target: &web::EventTarget, kind: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Listener variant for handlers that ignore the event object.
pub fn add_simple_listener(target: &web::EventTarget, kind: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

// ---------------- class / style helpers ----------------

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn has_class(el: &web::Element, class: &str) -> bool {
    el.class_list().contains(class)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    let _ = el.style().set_property(prop, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, prop: &str) {
    let _ = el.style().remove_property(prop);
}

pub fn lock_body_scroll(lock: bool) {
    if let Some(b) = body() {
        if lock {
            set_style(&b, "overflow", "hidden");
        } else {
            clear_style(&b, "overflow");
        }
    }
}

#[inline]
pub fn dataset_get(el: &web::Element, key: &str) -> Option<String> {
    el.dyn_ref::<web::HtmlElement>().and_then(|h| h.dataset().get(key))
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(win) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Smooth-scroll so `el` sits below the fixed header.
pub fn scroll_to_element(el: &web::Element, offset: f64) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        smooth_scroll_to((h.offset_top() as f64 - offset).max(0.0));
    }
}

// ---------------- timers ----------------

/// One-shot timer; the closure frees itself after firing.
pub fn set_timeout(handler: impl FnOnce() + 'static, ms: i32) {
    let cell: std::rc::Rc<std::cell::RefCell<Option<Closure<dyn FnMut()>>>> =
        std::rc::Rc::new(std::cell::RefCell::new(None));
    let cell2 = cell.clone();
    let mut handler = Some(handler);
    *cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(f) = handler.take() {
            f();
        }
        cell2.borrow_mut().take();
    }) as Box<dyn FnMut()>));
    if let (Some(win), Some(cb)) = (web::window(), cell.borrow().as_ref()) {
        let _ = win
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms);
    }
}

pub fn set_interval(handler: impl FnMut() + 'static, ms: i32) -> Option<i32> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let id = web::window()?
        .set_interval_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), ms)
        .ok();
    closure.forget();
    id
}

pub fn clear_interval(id: i32) {
    if let Some(win) = web::window() {
        win.clear_interval_with_handle(id);
    }
}

// ---------------- capability resolution ----------------

/// Optional handles for every UI region this crate can drive, resolved once
/// at startup. A `None` silently disables the dependent feature; subsystems
/// receive only the handles they need, already resolved.
pub struct Hooks {
    // chrome
    pub header: Option<web::Element>,
    pub scroll_progress: Option<web::HtmlElement>,
    pub reading_progress: Option<web::HtmlElement>,
    pub back_to_top: Option<web::Element>,
    pub share_btn: Option<web::Element>,
    pub main_content: Option<web::Element>,

    // background effects
    pub particle_canvas: Option<web::HtmlCanvasElement>,
    pub cursor_dot: Option<web::HtmlElement>,
    pub cursor_ring: Option<web::HtmlElement>,

    // loading screen
    pub loader: Option<web::HtmlElement>,
    pub loader_bar: Option<web::HtmlElement>,
    pub typewriter: Option<web::HtmlElement>,
    pub typewriter_caret: Option<web::HtmlElement>,

    // search
    pub search_input: Option<web::HtmlInputElement>,
    pub search_btn: Option<web::Element>,
    pub search_suggestions: Option<web::HtmlElement>,
    pub faq_search: Option<web::HtmlInputElement>,

    // modal
    pub modal_overlay: Option<web::Element>,
    pub modal_title: Option<web::Element>,
    pub modal_content: Option<web::HtmlElement>,
    pub modal_close: Option<web::Element>,

    // navigation
    pub mobile_toggle: Option<web::Element>,
    pub mobile_menu: Option<web::Element>,
    pub mobile_menu_close: Option<web::Element>,
    pub theme_toggle: Option<web::Element>,
    pub mobile_theme_toggle: Option<web::Element>,

    // accessibility panel
    pub a11y_toggle: Option<web::Element>,
    pub a11y_panel: Option<web::Element>,
    pub a11y_close: Option<web::Element>,
    pub font_size: Option<web::HtmlInputElement>,
    pub line_height: Option<web::HtmlInputElement>,
    pub high_contrast: Option<web::HtmlInputElement>,
    pub reduce_motion: Option<web::HtmlInputElement>,
    pub a11y_reset: Option<web::Element>,

    // card grid controls
    pub sort_btn: Option<web::Element>,
    pub sort_options: Option<web::Element>,
    pub cards_grid: Option<web::Element>,

    // forms
    pub newsletter_form: Option<web::HtmlFormElement>,
}

impl Hooks {
    pub fn resolve(document: &web::Document) -> Self {
        let cursor_root = by_id(document, "premiumCursor");
        let query_html = |root: &Option<web::Element>, sel: &str| -> Option<web::HtmlElement> {
            root.as_ref()?
                .query_selector(sel)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into().ok())
        };
        let loader = html_by_id(document, "premiumLoader");
        let doc_query_html = |sel: &str| -> Option<web::HtmlElement> {
            document
                .query_selector(sel)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into().ok())
        };

        Self {
            header: by_id(document, "header"),
            scroll_progress: html_by_id(document, "scrollProgress"),
            reading_progress: html_by_id(document, "readingProgress"),
            back_to_top: by_id(document, "backToTop"),
            share_btn: by_id(document, "shareBtn"),
            main_content: by_id(document, "mainContent"),

            particle_canvas: by_id(document, "particleCanvas").and_then(|el| el.dyn_into().ok()),
            cursor_dot: query_html(&cursor_root, ".cursor-dot"),
            cursor_ring: query_html(&cursor_root, ".cursor-ring"),

            loader,
            loader_bar: doc_query_html(".progress-bar"),
            typewriter: html_by_id(document, "typewriterText"),
            typewriter_caret: doc_query_html(".typewriter-cursor"),

            search_input: input_by_id(document, "premiumSearch"),
            search_btn: by_id(document, "searchBtn"),
            search_suggestions: html_by_id(document, "searchSuggestions"),
            faq_search: input_by_id(document, "faqSearch"),

            modal_overlay: by_id(document, "modalOverlay"),
            modal_title: by_id(document, "modalTitle"),
            modal_content: html_by_id(document, "modalContent"),
            modal_close: by_id(document, "modalClose"),

            mobile_toggle: by_id(document, "mobileToggle"),
            mobile_menu: by_id(document, "mobileMenu"),
            mobile_menu_close: by_id(document, "mobileMenuClose"),
            theme_toggle: by_id(document, "themeToggle"),
            mobile_theme_toggle: by_id(document, "mobileThemeToggle"),

            a11y_toggle: by_id(document, "accessibilityToggle"),
            a11y_panel: by_id(document, "accessibilityPanel"),
            a11y_close: by_id(document, "accessibilityClose"),
            font_size: input_by_id(document, "fontSize"),
            line_height: input_by_id(document, "lineHeight"),
            high_contrast: input_by_id(document, "highContrast"),
            reduce_motion: input_by_id(document, "reduceMotion"),
            a11y_reset: by_id(document, "resetAccessibility"),

            sort_btn: by_id(document, "sortBtn"),
            sort_options: by_id(document, "sortOptions"),
            cards_grid: by_id(document, "contradictionsGrid"),

            newsletter_form: by_id(document, "newsletterForm").and_then(|el| el.dyn_into().ok()),
        }
    }
}
