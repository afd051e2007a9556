use crate::layout::global_context::use_site_context;
use crate::shared::smooth_scroll;
use leptos::prelude::*;

/// Hero landmark (`header#home`).
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_site_context();
    let visible = ctx.revealed("home");

    view! {
        <header
            id="home"
            class="hero"
            style:scroll-margin-top=move || format!("{}px", ctx.nav_height.get().scroll_margin_top())
        >
            <div class="container text-center">
                <h1 class="fade-in-up" class:visible=visible>"Dosa Toppings"</h1>
                <p class="lead fade-in-up" class:visible=visible>
                    "Stone-ground podis, roasted in small batches for dosa, idli and rice."
                </p>
                <a
                    class="btn btn-primary btn-lg"
                    href="#products"
                    on:click=move |ev| smooth_scroll::follow_anchor(&ev, "#products", ctx)
                >
                    "Explore the range"
                </a>
            </div>
        </header>
    }
}
