//! Staggered one-shot fade-in of the footer items plus the pointer-only
//! visibility of the "go top" control.

use crate::layout::global_context::SiteContext;
use crate::shared::dom::{self, Setup};
use leptos::prelude::*;
use std::time::Duration;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsValue;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Number of `.fade-in-up` items rendered inside the footer.
pub const FOOTER_ITEMS: usize = 3;

pub fn install(ctx: SiteContext) -> Setup {
    let Some(footer) = dom::by_id(dom::FOOTER_ID) else {
        return Setup::NotConfigured("footer");
    };

    ctx.go_top_visible.set(false);

    if !dom::has_global("IntersectionObserver") {
        ctx.footer_revealed.set(FOOTER_ITEMS);
        return Setup::Unsupported("IntersectionObserver");
    }

    let (threshold, stagger_ms) = ctx
        .config
        .with_value(|c| (c.footer.threshold, c.footer.stagger_ms));

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if !intersecting {
                return;
            }
            observer.disconnect();
            for index in 0..FOOTER_ITEMS {
                let delay = Duration::from_millis(u64::from(stagger_ms) * index as u64);
                set_timeout(
                    move || {
                        ctx.footer_revealed
                            .try_update(|n| *n = (*n).max(index + 1));
                    },
                    delay,
                );
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer.observe(&footer),
        Err(err) => {
            log::warn!("Footer observer construction failed: {err:?}");
            ctx.footer_revealed.set(FOOTER_ITEMS);
            return Setup::Unsupported("IntersectionObserver");
        }
    }

    callback.forget();
    Setup::Attached
}

/// Pointer devices show the control while hovering the footer; touch
/// devices never do.
pub fn set_footer_hover(ctx: SiteContext, hovering: bool) {
    if !ctx.is_released() || dom::is_touch_device() {
        return;
    }
    ctx.go_top_visible.set(hovering);
}
