use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::notify;

const SHARE_TITLE: &str = "The Qur'an: The Pure Path";
const SHARE_TEXT: &str = "Discover the pure path of Islam through the Qur'an alone";

/// Platform share when available, clipboard copy of the page URL otherwise.
pub fn share_page(document: web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let navigator = window.navigator();
    let href = window.location().href().unwrap_or_default();

    let has_native_share =
        js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share")).unwrap_or(false);

    if has_native_share {
        let data = web::ShareData::new();
        data.set_title(SHARE_TITLE);
        data.set_text(SHARE_TEXT);
        data.set_url(&href);
        let promise = navigator.share_with_data(&data);
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[share] dismissed or failed: {:?}", e);
            }
        });
    } else {
        let promise = navigator.clipboard().write_text(&href);
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => notify::show(&document, "Link copied to clipboard!", notify::Kind::Success),
                Err(_) => notify::show(&document, "Unable to copy link", notify::Kind::Error),
            }
        });
    }
}
