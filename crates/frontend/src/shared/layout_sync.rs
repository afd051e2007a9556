//! Keeps the navbar height metric in step with the rendered navigation bar.

use crate::layout::global_context::SiteContext;
use crate::shared::dom::{self, Setup};
use contracts::shared::layout_metric::NavHeight;
use contracts::shared::scheduling::Debounce;
use leptos::ev;
use leptos::prelude::*;
use std::time::Duration;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::ResizeObserver;

/// Measures `.site-nav` and publishes the result. Without the element the
/// current value is kept.
pub fn sync_now(ctx: SiteContext) {
    let Some(nav) = dom::query(dom::NAV_SELECTOR) else {
        return;
    };
    let rect_height = nav.get_bounding_client_rect().height();
    let height = ctx
        .config
        .with_value(|c| NavHeight::measure(rect_height, &c.nav));

    dom::set_root_property("--nav-height", &height.css_value());
    if ctx.nav_height.get_untracked() != height {
        log::debug!("Navbar height is now {}px", height.px());
        ctx.nav_height.set(height);
    }
}

pub fn sync_after(ctx: SiteContext, delay_ms: u32) {
    set_timeout(move || sync_now(ctx), Duration::from_millis(u64::from(delay_ms)));
}

/// Delayed re-measure after the mobile menu toggles open or closed.
pub fn on_menu_toggle(ctx: SiteContext) {
    if !ctx.is_released() {
        return;
    }
    let delay = ctx.config.with_value(|c| c.nav.toggle_delay_ms);
    sync_after(ctx, delay);
}

pub fn install(ctx: SiteContext) -> Setup {
    let Some(nav) = dom::query(dom::NAV_SELECTOR) else {
        return Setup::NotConfigured("navigation bar");
    };

    let nav_config = ctx.config.with_value(|c| c.nav.clone());

    // The gate releases after `load`; the settle delay still applies.
    sync_after(ctx, nav_config.load_settle_ms);

    let debounce = StoredValue::new(Debounce::default());
    let pending = StoredValue::new(None::<TimeoutHandle>);
    let delay = Duration::from_millis(u64::from(nav_config.resize_debounce_ms));
    let _ = window_event_listener(ev::resize, move |_| {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        let Some(ticket) = debounce.try_update_value(|d| d.schedule()) else {
            return;
        };
        let fire = move || {
            if debounce.try_update_value(|d| d.fire(ticket)) == Some(true) {
                sync_now(ctx);
            }
        };
        pending.set_value(set_timeout_with_handle(fire, delay).ok());
    });

    let orientation_delay = nav_config.orientation_delay_ms;
    let _ = window_event_listener_untyped("orientationchange", move |_| {
        sync_after(ctx, orientation_delay);
    });

    if dom::has_global("ResizeObserver") {
        let callback = Closure::<dyn FnMut(js_sys::Array, ResizeObserver)>::new(
            move |_entries: js_sys::Array, _observer: ResizeObserver| sync_now(ctx),
        );
        match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&nav);
                callback.forget();
            }
            Err(err) => log::warn!("ResizeObserver construction failed: {err:?}"),
        }
    }

    sync_now(ctx);
    Setup::Attached
}
