use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::core::metrics::Metrics;
use crate::dom;
use crate::perf;

/// FAQ accordion: opening one item closes the others; aria-expanded tracks
/// the open state directly from the toggle handler.
pub fn wire(document: &web::Document, metrics: Rc<RefCell<Metrics>>) {
    let items = dom::query_all(document, ".premium-faq-item");
    if items.is_empty() {
        return;
    }

    // ARIA contract between each question and its answer region
    for (i, item) in items.iter().enumerate() {
        let question = item.query_selector(".faq-question").ok().flatten();
        let answer = item.query_selector(".faq-answer").ok().flatten();
        if let (Some(question), Some(answer)) = (question, answer) {
            let question_id = format!("faq-question-{i}");
            let answer_id = format!("faq-answer-{i}");
            let _ = question.set_attribute("id", &question_id);
            let _ = question.set_attribute("role", "button");
            let _ = question.set_attribute("aria-expanded", "false");
            let _ = question.set_attribute("aria-controls", &answer_id);
            let _ = question.set_attribute("tabindex", "0");
            let _ = answer.set_attribute("id", &answer_id);
            let _ = answer.set_attribute("role", "region");
            let _ = answer.set_attribute("aria-labelledby", &question_id);
        }
    }

    for item in &items {
        let Ok(Some(question)) = item.query_selector(".faq-question") else {
            continue;
        };
        let item_el = item.clone();
        let all_items = items.clone();
        let metrics_item = metrics.clone();
        dom::add_simple_listener(&question, "click", move || {
            let is_open = !dom::has_class(&item_el, "open");
            for other in &all_items {
                dom::set_class(other, "open", is_open && *other == item_el);
                sync_aria(other);
            }
            let label = item_el
                .query_selector("h3")
                .ok()
                .flatten()
                .and_then(|h| h.text_content())
                .unwrap_or_default();
            perf::track(&metrics_item, "faq_toggle", &label);
        });
    }
}

fn sync_aria(item: &web::Element) {
    let is_open = dom::has_class(item, "open");
    if let Ok(Some(question)) = item.query_selector(".faq-question") {
        let _ = question.set_attribute("aria-expanded", if is_open { "true" } else { "false" });
    }
    if let Ok(Some(toggle)) = item.query_selector(".faq-toggle") {
        let _ = toggle.set_attribute(
            "aria-label",
            if is_open { "Collapse answer" } else { "Expand answer" },
        );
    }
}
