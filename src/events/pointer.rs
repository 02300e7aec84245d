use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{CARD_SELECTOR, HOVER_SELECTOR, POINTER_MIN_VIEWPORT_PX, TILT_DIVISOR};
use crate::dom;

/// Track the raw pointer position; the cursor frame loop consumes it.
pub fn wire_pointer_tracking(document: &web::Document, raw: Rc<RefCell<Vec2>>) {
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        *raw.borrow_mut() = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    });
}

/// Toggle a body class while the pointer is over an interactive element so
/// the custom cursor can restyle itself.
pub fn wire_hover_classes(document: &web::Document) {
    for el in dom::query_all(document, HOVER_SELECTOR) {
        dom::add_simple_listener(&el, "mouseenter", || {
            if let Some(b) = dom::body() {
                dom::add_class(&b, "cursor-hover");
            }
        });
        dom::add_simple_listener(&el, "mouseleave", || {
            if let Some(b) = dom::body() {
                dom::remove_class(&b, "cursor-hover");
            }
        });
    }
}

fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    let rotate_x = (y - height / 2.0) / TILT_DIVISOR;
    let rotate_y = (width / 2.0 - x) / TILT_DIVISOR;
    format!(
        "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) translateZ(10px)",
        rotate_x, rotate_y
    )
}

/// Pointer-position tilt on the content cards, skipped at tablet widths.
pub fn wire_card_tilt(document: &web::Document) {
    for el in dom::query_all(document, CARD_SELECTOR) {
        let Ok(card) = el.dyn_into::<web::HtmlElement>() else {
            continue;
        };

        {
            let card_move = card.clone();
            dom::add_listener(&card, "mousemove", move |ev: web::MouseEvent| {
                let (vw, _) = dom::viewport_size();
                if vw <= POINTER_MIN_VIEWPORT_PX {
                    return;
                }
                let rect = card_move.get_bounding_client_rect();
                let x = ev.client_x() as f64 - rect.left();
                let y = ev.client_y() as f64 - rect.top();
                dom::set_style(
                    &card_move,
                    "transform",
                    &tilt_transform(x, y, rect.width(), rect.height()),
                );
            });
        }
        {
            let card_leave = card.clone();
            dom::add_simple_listener(&card, "mouseleave", move || {
                dom::clear_style(&card_leave, "transform");
            });
        }
        {
            let card_down = card.clone();
            dom::add_simple_listener(&card, "mousedown", move || {
                dom::set_style(&card_down, "transform", "scale(0.98)");
            });
        }
        {
            let card_up = card.clone();
            dom::add_simple_listener(&card, "mouseup", move || {
                dom::clear_style(&card_up, "transform");
            });
        }
    }
}
