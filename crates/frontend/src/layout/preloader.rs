use crate::layout::global_context::use_site_context;
use leptos::prelude::*;

/// Splash screen shown until the lifecycle gate is released. It fades out via
/// `body.loaded` and is unmounted once the fade delay has passed.
#[component]
pub fn Preloader() -> impl IntoView {
    let ctx = use_site_context();

    view! {
        <Show when=move || ctx.phase().shows_preloader()>
            <div
                id="preloader"
                role="status"
                aria-hidden=move || ctx.phase().is_released().to_string()
            >
                <div class="preloader-inner">
                    <div class="preloader-spinner"></div>
                    <span class="preloader-text">"Roasting fresh podi..."</span>
                </div>
            </div>
        </Show>
    }
}
