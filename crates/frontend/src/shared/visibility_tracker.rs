//! Highlights the navigation entry of the visible section and reveals the
//! section's content once.

use crate::layout::global_context::SiteContext;
use crate::shared::dom::{self, Setup};
use contracts::shared::visibility::SectionId;
use leptos::prelude::WithValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsValue;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub fn install(ctx: SiteContext) -> Setup {
    if !dom::has_global("IntersectionObserver") {
        return Setup::Unsupported("IntersectionObserver");
    }

    let landmarks = dom::query_all(dom::LANDMARK_SELECTOR);
    if landmarks.is_empty() {
        return Setup::NotConfigured("landmarks");
    }

    let (threshold, root_margin) = ctx
        .config
        .with_value(|c| (c.sections.threshold, c.sections.root_margin.clone()));

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let id = entry.target().id();
                if !id.is_empty() {
                    ctx.landmark_visible(SectionId::new(id));
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&root_margin);
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("IntersectionObserver construction failed: {err:?}");
            return Setup::Unsupported("IntersectionObserver");
        }
    };

    for landmark in &landmarks {
        observer.observe(landmark);
    }
    log::debug!("Observing {} landmarks", landmarks.len());

    // Lives for the page lifetime.
    callback.forget();
    Setup::Attached
}
