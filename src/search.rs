use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    FAQ_DEBOUNCE_MS, NAV_SCROLL_OFFSET_PX, SEARCHABLE_SELECTOR, SEARCH_DEBOUNCE_MS,
    SEARCH_HIGHLIGHT_MS, SEARCH_RESULT_LIMIT,
};
use crate::core::debounce::DebounceGate;
use crate::core::metrics::Metrics;
use crate::core::search::{faq_matches, highlight, EntryKind, SearchIndex};
use crate::dom;
use crate::perf;

#[derive(Clone)]
pub struct SearchWiring {
    pub input: Option<web::HtmlInputElement>,
    pub button: Option<web::Element>,
    pub suggestions: Option<web::HtmlElement>,
    pub faq_search: Option<web::HtmlInputElement>,
}

/// Index plus the DOM elements its entries came from, kept in entry order so
/// query hits map straight back to page elements.
struct IndexedContent {
    index: SearchIndex,
    elements: Vec<web::Element>,
}

fn build_index(document: &web::Document) -> IndexedContent {
    let mut index = SearchIndex::default();
    let mut elements = Vec::new();
    for el in dom::query_all(document, SEARCHABLE_SELECTOR) {
        let text = el.text_content().unwrap_or_default();
        let section = el
            .closest(crate::constants::SECTION_SELECTOR)
            .ok()
            .flatten()
            .map(|s| s.id())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| "unknown".to_string());
        let kind = entry_kind(&el);
        index.push(&text, &section, kind);
        elements.push(el);
    }
    IndexedContent { index, elements }
}

fn entry_kind(el: &web::Element) -> EntryKind {
    if dom::has_class(el, "card-title") {
        EntryKind::Card
    } else if dom::has_class(el, "section-title") {
        EntryKind::Section
    } else if el.closest(".premium-faq-item").ok().flatten().is_some() {
        EntryKind::Faq
    } else {
        EntryKind::Content
    }
}

pub fn wire(document: &web::Document, w: SearchWiring, metrics: Rc<RefCell<Metrics>>) {
    let content = Rc::new(build_index(document));

    if let (Some(input), Some(suggestions)) = (&w.input, &w.suggestions) {
        // Debounced live search over the input value
        let gate = Rc::new(RefCell::new(DebounceGate::default()));
        {
            let gate = gate.clone();
            let input_el = input.clone();
            let suggestions_el = suggestions.clone();
            let content = content.clone();
            let doc = document.clone();
            dom::add_simple_listener(input, "input", move || {
                let token = gate.borrow_mut().arm();
                let gate = gate.clone();
                let input_el = input_el.clone();
                let suggestions_el = suggestions_el.clone();
                let content = content.clone();
                let doc = doc.clone();
                dom::set_timeout(
                    move || {
                        if gate.borrow().is_current(token) {
                            run_search(&doc, &content, &suggestions_el, &input_el.value(), false);
                        }
                    },
                    SEARCH_DEBOUNCE_MS,
                );
            });
        }

        // Re-run on focus when a query is already present
        {
            let input_el = input.clone();
            let suggestions_el = suggestions.clone();
            let content = content.clone();
            let doc = document.clone();
            dom::add_simple_listener(input, "focus", move || {
                let value = input_el.value();
                if !value.trim().is_empty() {
                    run_search(&doc, &content, &suggestions_el, &value, false);
                }
            });
        }

        // Dismiss suggestions on outside clicks
        {
            let input_el = input.clone();
            let suggestions_el = suggestions.clone();
            dom::add_listener(document, "click", move |ev: web::MouseEvent| {
                let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok()) else {
                    return;
                };
                if !input_el.contains(Some(&target)) && !suggestions_el.contains(Some(&target)) {
                    dom::remove_class(&suggestions_el, "show");
                }
            });
        }

        // Delegated click-through from a suggestion to its section
        {
            let suggestions_el = suggestions.clone();
            let doc = document.clone();
            dom::add_listener(suggestions, "click", move |ev: web::MouseEvent| {
                let Some(hit) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web::Element>().ok())
                    .and_then(|el| el.closest(".search-suggestion").ok().flatten())
                else {
                    return;
                };
                if let Some(section_id) = dom::dataset_get(&hit, "section") {
                    if let Some(section) = dom::by_id(&doc, &section_id) {
                        dom::scroll_to_element(&section, NAV_SCROLL_OFFSET_PX);
                    }
                }
                dom::remove_class(&suggestions_el, "show");
            });
        }
    }

    // Explicit search via the button applies the transient page highlight
    if let (Some(button), Some(input), Some(suggestions)) = (&w.button, &w.input, &w.suggestions) {
        let input_el = input.clone();
        let suggestions_el = suggestions.clone();
        let content = content.clone();
        let doc = document.clone();
        let metrics_btn = metrics.clone();
        dom::add_simple_listener(button, "click", move || {
            let value = input_el.value();
            if value.trim().is_empty() {
                return;
            }
            run_search(&doc, &content, &suggestions_el, &value, true);
            perf::track(&metrics_btn, "search", &value);
        });
    }

    // Debounced FAQ filter
    if let Some(faq_input) = &w.faq_search {
        let gate = Rc::new(RefCell::new(DebounceGate::default()));
        let faq_el = faq_input.clone();
        let doc = document.clone();
        dom::add_simple_listener(faq_input, "input", move || {
            let token = gate.borrow_mut().arm();
            let gate = gate.clone();
            let faq_el = faq_el.clone();
            let doc = doc.clone();
            dom::set_timeout(
                move || {
                    if gate.borrow().is_current(token) {
                        filter_faq_items(&doc, &faq_el.value());
                    }
                },
                FAQ_DEBOUNCE_MS,
            );
        });
    }

    // FAQ category buttons
    let category_buttons = dom::query_all(document, ".faq-category-btn");
    for btn in &category_buttons {
        let btn_el = btn.clone();
        let all = category_buttons.clone();
        let doc = document.clone();
        let metrics_cat = metrics.clone();
        dom::add_simple_listener(btn, "click", move || {
            for other in &all {
                dom::remove_class(other, "active");
            }
            dom::add_class(&btn_el, "active");
            let category = dom::dataset_get(&btn_el, "category").unwrap_or_else(|| "all".to_string());
            filter_faq_by_category(&doc, &category);
            perf::track(&metrics_cat, "faq_category", &category);
        });
    }
}

fn run_search(
    document: &web::Document,
    content: &IndexedContent,
    suggestions: &web::HtmlElement,
    query: &str,
    explicit: bool,
) {
    if query.trim().is_empty() {
        dom::remove_class(suggestions, "show");
        return;
    }

    let hits = content.index.query(query, SEARCH_RESULT_LIMIT);
    render_suggestions(content, suggestions, &hits, query);

    if explicit && !hits.is_empty() {
        apply_transient_highlight(document, content, &hits);
    }
}

fn render_suggestions(
    content: &IndexedContent,
    suggestions: &web::HtmlElement,
    hits: &[usize],
    query: &str,
) {
    if hits.is_empty() {
        suggestions.set_inner_html(r#"<div class="search-suggestion">No results found</div>"#);
    } else {
        let mut html = String::new();
        for &i in hits {
            let Some(entry) = content.index.entry(i) else {
                continue;
            };
            html.push_str(&format!(
                concat!(
                    r#"<div class="search-suggestion" data-section="{section}" data-type="{kind}">"#,
                    r#"<div class="suggestion-type">{kind}</div>"#,
                    r#"<div class="suggestion-text">{text}</div>"#,
                    "</div>"
                ),
                section = entry.section,
                kind = entry.kind.label(),
                text = highlight(&entry.text, query),
            ));
        }
        suggestions.set_inner_html(&html);
    }
    dom::add_class(suggestions, "show");
}

/// Flag the matched page elements for a few seconds, then clear.
fn apply_transient_highlight(document: &web::Document, content: &IndexedContent, hits: &[usize]) {
    for el in dom::query_all(document, ".search-highlight") {
        dom::remove_class(&el, "search-highlight");
    }
    for &i in hits {
        if let Some(el) = content.elements.get(i) {
            dom::add_class(el, "search-highlight");
        }
    }
    let doc = document.clone();
    dom::set_timeout(
        move || {
            for el in dom::query_all(&doc, ".search-highlight") {
                dom::remove_class(&el, "search-highlight");
            }
        },
        SEARCH_HIGHLIGHT_MS,
    );
}

pub fn filter_faq_items(document: &web::Document, query: &str) {
    for item in dom::query_all(document, ".premium-faq-item") {
        let question = item
            .query_selector("h3")
            .ok()
            .flatten()
            .and_then(|el| el.text_content())
            .unwrap_or_default();
        let answer = item
            .query_selector(".answer-content")
            .ok()
            .flatten()
            .and_then(|el| el.text_content())
            .unwrap_or_default();
        let visible = faq_matches(&question, &answer, query);
        if let Some(h) = item.dyn_ref::<web::HtmlElement>() {
            dom::set_style(h, "display", if visible { "block" } else { "none" });
        }
    }
}

pub fn filter_faq_by_category(document: &web::Document, category: &str) {
    for item in dom::query_all(document, ".premium-faq-item") {
        let matches = category == "all"
            || dom::dataset_get(&item, "category").as_deref() == Some(category);
        if let Some(h) = item.dyn_ref::<web::HtmlElement>() {
            dom::set_style(h, "display", if matches { "block" } else { "none" });
        }
    }
}
