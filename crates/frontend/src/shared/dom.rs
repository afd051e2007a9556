//! Thin, failure-tolerant wrappers over `web_sys` lookups.
//!
//! Every collaborator outside the Leptos tree is optional: lookups return
//! `Option` and installers report what they did through [`Setup`].

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub const NAV_SELECTOR: &str = ".site-nav";
pub const LANDMARK_SELECTOR: &str = "main section, header#home";
pub const FOOTER_ID: &str = "footer";

/// Outcome of attaching one page behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setup {
    Attached,
    /// A required element is not on the page.
    NotConfigured(&'static str),
    /// The browser lacks a required API.
    Unsupported(&'static str),
}

impl Setup {
    pub fn log(self, component: &str) {
        match self {
            Setup::Attached => log::debug!("{component}: attached"),
            Setup::NotConfigured(what) => log::debug!("{component}: skipped, no {what}"),
            Setup::Unsupported(api) => log::warn!("{component}: skipped, {api} unavailable"),
        }
    }
}

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// `true` if `window[name]` exists (capability probe for observer APIs).
pub fn has_global(name: &str) -> bool {
    window()
        .and_then(|w| js_sys::Reflect::has(&w, &JsValue::from_str(name)).ok())
        .unwrap_or(false)
}

pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn is_touch_device() -> bool {
    has_global("ontouchstart") || window().map_or(false, |w| w.navigator().max_touch_points() > 1)
}

pub fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn add_body_class(class: &str) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.class_list().add_1(class);
    }
}

/// Sets a custom property on `<html>`.
pub fn set_root_property(name: &str, value: &str) {
    let root = document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(root) = root {
        let _ = root.style().set_property(name, value);
    }
}
