//! Wires the preloader gate to the document lifecycle.

use crate::layout::global_context::SiteContext;
use crate::shared::{dom, footer_reveal, layout_sync, scroll_float, visibility_tracker};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

/// Starts the gate: records the start mark and waits for `load`.
pub fn arm(ctx: SiteContext) {
    let Some(document) = dom::document() else {
        log::warn!("No document, releasing gate immediately");
        release(ctx);
        return;
    };

    match document.ready_state().as_str() {
        "complete" => on_document_loaded(ctx),
        state => {
            if state == "loading" {
                let restart = Closure::once_into_js(move || {
                    ctx.gate.update(|g| g.restart_at(js_sys::Date::now()));
                });
                let _ = document.add_event_listener_with_callback(
                    "DOMContentLoaded",
                    restart.unchecked_ref(),
                );
            }
            // `load` fires once; the handle is not needed afterwards.
            let _ = window_event_listener(ev::load, move |_| on_document_loaded(ctx));
        }
    }
}

fn on_document_loaded(ctx: SiteContext) {
    let remaining = ctx
        .gate
        .with_untracked(|g| g.remaining_after(js_sys::Date::now()));
    log::info!("Document loaded, preloader stays for {remaining}ms more");

    spawn_local(async move {
        if remaining > 0 {
            TimeoutFuture::new(remaining).await;
        }
        release(ctx);
    });
}

fn release(ctx: SiteContext) {
    let released = ctx.gate.try_update(|g| g.release()).unwrap_or(false);
    if !released {
        return;
    }
    log::info!("Preloader gate released");

    dom::add_body_class("loaded");

    let remove_delay = ctx.gate.with_untracked(|g| g.remove_delay_ms());
    spawn_local(async move {
        TimeoutFuture::new(remove_delay).await;
        if ctx.gate.try_update(|g| g.remove()).unwrap_or(false) {
            log::debug!("Preloader removed");
        }
    });

    visibility_tracker::install(ctx).log("section tracker");
    footer_reveal::install(ctx).log("footer reveal");
    scroll_float::install(ctx).log("navbar float");
    layout_sync::install(ctx).log("layout sync");
}
