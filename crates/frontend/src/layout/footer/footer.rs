use crate::layout::global_context::use_site_context;
use crate::shared::footer_reveal::{self, FOOTER_ITEMS};
use crate::shared::smooth_scroll;
use leptos::prelude::*;

const FOOTER_LINES: [&str; FOOTER_ITEMS] = [
    "Dosa Toppings",
    "Handmade podis from our kitchen to yours.",
    "© Dosa Toppings. All rights reserved.",
];

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_site_context();

    view! {
        <footer
            id="footer"
            class="site-footer py-4"
            on:mouseenter=move |_| footer_reveal::set_footer_hover(ctx, true)
            on:mouseleave=move |_| footer_reveal::set_footer_hover(ctx, false)
        >
            <div class="container text-center">
                {FOOTER_LINES.into_iter().enumerate().map(|(i, line)| view! {
                    <p class="mb-1 fade-in-up" class:visible=ctx.footer_item_visible(i)>{line}</p>
                }).collect_view()}
            </div>
        </footer>
        <button
            id="goTop"
            class="go-top"
            type="button"
            aria-label="Back to top"
            class:show=move || ctx.go_top_visible.get()
            on:click=move |_| smooth_scroll::scroll_to_top(ctx)
        >
            "↑"
        </button>
    }
}
