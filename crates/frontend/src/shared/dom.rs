//! Small DOM helpers. Every function degrades to a no-op when the element or
//! the window is missing.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub fn pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Full navigation (page reload)
pub fn navigate(url: &str) {
    log::debug!("navigate: {}", url);
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

pub fn reload() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

/// Rewrites the query string without reloading or adding a history entry
pub fn replace_search(new_search: &str) {
    if search() == new_search {
        return;
    }
    let url = format!("{}{}", pathname(), new_search);
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
        }
    }
}

/// Locks or restores page scrolling while an overlay is shown
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
}

/// Nearest ancestor-or-self of the event target matching `selector`
pub fn closest_from_event(event: &web_sys::Event, selector: &str) -> Option<Element> {
    let target = event.target()?;
    let element = target.dyn_into::<Element>().ok()?;
    element.closest(selector).ok().flatten()
}

/// Whether `event` happened inside `container`
pub fn event_within(event: &web_sys::Event, container: &HtmlElement) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
        .map(|node| container.contains(Some(&node)))
        .unwrap_or(false)
}
