use wasm_bindgen::JsValue;

use crate::overlay::OverlayHost;

const OVERLAY_STATE: &str = "portfolio-overlay";

/// The real document: body overflow for the scroll lock, `window.history`
/// for the back action.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDocument;

fn history() -> Option<web_sys::History> {
    web_sys::window()?.history().ok()
}

fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        if let Err(e) = body.style().set_property("overflow", value) {
            log::warn!("couldn't set body overflow: {e:?}");
        }
    }
}

impl OverlayHost for BrowserDocument {
    fn lock_scroll(&mut self) {
        set_body_overflow("hidden");
    }

    fn unlock_scroll(&mut self) {
        set_body_overflow("");
    }

    fn push_overlay_entry(&mut self) {
        if let Some(h) = history() {
            if let Err(e) = h.push_state(&JsValue::from_str(OVERLAY_STATE), "") {
                log::warn!("couldn't push overlay history entry: {e:?}");
            }
        }
    }

    fn at_overlay_entry(&self) -> bool {
        history()
            .and_then(|h| h.state().ok())
            .and_then(|s| s.as_string())
            .is_some_and(|s| s == OVERLAY_STATE)
    }

    fn history_back(&mut self) {
        if let Some(h) = history() {
            if let Err(e) = h.back() {
                log::warn!("couldn't roll back overlay history entry: {e:?}");
            }
        }
    }
}
