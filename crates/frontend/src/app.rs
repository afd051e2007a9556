use crate::layout::global_context::SiteContext;
use crate::layout::Shell;
use crate::shared::lifecycle;
use contracts::shared::config::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn App(started_at: f64) -> impl IntoView {
    let config = SiteConfig::embedded().unwrap_or_else(|err| {
        log::warn!("Embedded site config rejected, using defaults: {err:#}");
        SiteConfig::default()
    });

    // Provide the SiteContext to the whole page via context.
    let ctx = SiteContext::new(config, started_at);
    provide_context(ctx);

    // Everything interactive waits for the preloader gate.
    lifecycle::arm(ctx);

    view! {
        <Shell />
    }
}
