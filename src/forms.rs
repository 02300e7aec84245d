use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::forms::{email_domain, validate_email};
use crate::core::metrics::Metrics;
use crate::dom;
use crate::notify;
use crate::perf;

/// Newsletter signup: the only validated input on the page. An invalid
/// address surfaces a transient notification; nothing else is checked.
pub fn wire(document: &web::Document, form: Option<web::HtmlFormElement>, metrics: Rc<RefCell<Metrics>>) {
    let Some(form) = form else {
        return;
    };

    let form_el = form.clone();
    let doc = document.clone();
    dom::add_listener(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();

        let Some(input) = form_el
            .query_selector(".newsletter-input")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        else {
            return;
        };
        let email = input.value();

        if validate_email(&email) {
            notify::show(
                &doc,
                "Thank you for subscribing! We'll keep you updated.",
                notify::Kind::Success,
            );
            form_el.reset();
            // Log the domain only, never the address
            let domain = email_domain(&email).unwrap_or_default().to_string();
            perf::track(&metrics, "newsletter_signup", &domain);
        } else {
            notify::show(&doc, "Please enter a valid email address", notify::Kind::Error);
        }
    });
}
