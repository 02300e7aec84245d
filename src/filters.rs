use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::metrics::Metrics;
use crate::dom;
use crate::perf;

#[derive(Clone)]
pub struct FilterWiring {
    pub sort_btn: Option<web::Element>,
    pub sort_options: Option<web::Element>,
    pub cards_grid: Option<web::Element>,
}

pub fn wire(document: &web::Document, w: FilterWiring, metrics: Rc<RefCell<Metrics>>) {
    // Category filter tabs
    let tabs = dom::query_all(document, ".filter-tab");
    for tab in &tabs {
        let tab_el = tab.clone();
        let all_tabs = tabs.clone();
        let doc = document.clone();
        let metrics_tab = metrics.clone();
        dom::add_simple_listener(tab, "click", move || {
            for other in &all_tabs {
                dom::remove_class(other, "active");
            }
            dom::add_class(&tab_el, "active");
            let filter = dom::dataset_get(&tab_el, "filter").unwrap_or_else(|| "all".to_string());
            apply_filter(&doc, &filter);
            update_filter_counts(&doc);
            perf::track(&metrics_tab, "filter", &filter);
        });
    }

    // Sort dropdown
    if let (Some(sort_btn), Some(sort_options)) = (&w.sort_btn, &w.sort_options) {
        {
            let options_el = sort_options.clone();
            dom::add_simple_listener(sort_btn, "click", move || {
                let showing = dom::has_class(&options_el, "show");
                dom::set_class(&options_el, "show", !showing);
            });
        }
        {
            let btn_el = sort_btn.clone();
            let options_el = sort_options.clone();
            dom::add_listener(document, "click", move |ev: web::MouseEvent| {
                let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok()) else {
                    return;
                };
                if !btn_el.contains(Some(&target)) && !options_el.contains(Some(&target)) {
                    dom::remove_class(&options_el, "show");
                }
            });
        }

        let options = dom::query_all_in(sort_options, ".sort-option");
        for option in &options {
            let option_el = option.clone();
            let all_options = options.clone();
            let btn_el = sort_btn.clone();
            let options_el = sort_options.clone();
            let grid = w.cards_grid.clone();
            let metrics_sort = metrics.clone();
            dom::add_simple_listener(option, "click", move || {
                for other in &all_options {
                    dom::remove_class(other, "active");
                }
                dom::add_class(&option_el, "active");
                if let Ok(Some(label)) = btn_el.query_selector("span") {
                    let name = option_el.text_content().unwrap_or_default();
                    label.set_text_content(Some(&format!("Sort by {}", name.trim())));
                }
                dom::remove_class(&options_el, "show");
                let sort = dom::dataset_get(&option_el, "sort").unwrap_or_else(|| "relevance".to_string());
                if let Some(grid) = &grid {
                    apply_sorting(grid, &sort);
                }
                perf::track(&metrics_sort, "sort", &sort);
            });
        }
    }

    // Grid/list view toggle
    let view_buttons = dom::query_all(document, ".view-btn");
    for btn in &view_buttons {
        let btn_el = btn.clone();
        let all_buttons = view_buttons.clone();
        let grid = w.cards_grid.clone();
        let metrics_view = metrics.clone();
        dom::add_simple_listener(btn, "click", move || {
            for other in &all_buttons {
                dom::remove_class(other, "active");
            }
            dom::add_class(&btn_el, "active");
            let mode = dom::dataset_get(&btn_el, "view").unwrap_or_else(|| "grid".to_string());
            if let Some(grid) = &grid {
                dom::set_class(grid, "list-view", mode == "list");
            }
            perf::track(&metrics_view, "view_mode", &mode);
        });
    }

    update_filter_counts(document);
}

fn apply_filter(document: &web::Document, filter: &str) {
    for card in dom::query_all(document, ".contradiction-card") {
        let category = dom::dataset_get(&card, "category");
        let show = filter == "all" || category.as_deref() == Some(filter);
        dom::set_class(&card, "hidden", !show);
        if let Some(h) = card.dyn_ref::<web::HtmlElement>() {
            dom::set_style(h, "display", if show { "block" } else { "none" });
        }
    }
}

fn update_filter_counts(document: &web::Document) {
    let total = dom::query_all(document, ".contradiction-card").len();
    for tab in dom::query_all(document, ".filter-tab") {
        let filter = dom::dataset_get(&tab, "filter").unwrap_or_else(|| "all".to_string());
        let count = if filter == "all" {
            total
        } else {
            dom::query_all(
                document,
                &format!(".contradiction-card[data-category=\"{}\"]", filter),
            )
            .len()
        };
        if let Ok(Some(count_el)) = tab.query_selector(".tab-count") {
            count_el.set_text_content(Some(&count.to_string()));
        }
    }
}

fn severity_rank(card: &web::Element) -> i32 {
    let Ok(Some(indicator)) = card.query_selector(".severity-indicator") else {
        return 1;
    };
    if dom::has_class(&indicator, "high") {
        3
    } else if dom::has_class(&indicator, "medium") {
        2
    } else {
        1
    }
}

fn card_title(card: &web::Element) -> String {
    card.query_selector(".card-title")
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .unwrap_or_default()
        .to_lowercase()
}

/// Reorder cards in the grid. Relevance is the document order and is left
/// untouched.
fn apply_sorting(grid: &web::Element, sort: &str) {
    let mut cards = dom::query_all_in(grid, ".contradiction-card");
    match sort {
        "alphabetical" => cards.sort_by_key(card_title),
        "severity" => cards.sort_by_key(|c| -severity_rank(c)),
        _ => return,
    }
    for card in &cards {
        let _ = grid.append_child(card);
    }
}
