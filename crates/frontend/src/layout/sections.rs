//! Main content landmarks: products, about and contact.

use crate::domain::a001_product::ui::list::ProductList;
use crate::layout::global_context::use_site_context;
use leptos::prelude::*;

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("Small batches", "Every podi is roasted and ground in batches of a few kilos."),
    ("No preservatives", "Spices, lentils and salt. Nothing you cannot pronounce."),
    ("Four families", "Traditional, health, fusion and kid-friendly blends."),
];

/// A landmark section whose scroll offset follows the navbar height.
#[component]
fn Landmark(id: &'static str, #[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let ctx = use_site_context();

    view! {
        <section
            id=id
            class=format!("py-5 {class}")
            style:scroll-margin-top=move || format!("{}px", ctx.nav_height.get().scroll_margin_top())
        >
            <div class="container">{children()}</div>
        </section>
    }
}

#[component]
pub fn ProductsSection() -> impl IntoView {
    let visible = use_site_context().revealed("products");

    view! {
        <Landmark id="products">
            <h2 class="fade-in-up" class:visible=visible>"Our Podis"</h2>
            <p class="text-muted fade-in-up" class:visible=visible>
                "Tap a card on mobile (or hover on desktop) to see what goes into it."
            </p>
            <ProductList />
        </Landmark>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    let visible = use_site_context().revealed("about");

    view! {
        <Landmark id="about" class="bg-light">
            <h2 class="fade-in-up" class:visible=visible>"About us"</h2>
            <p class="fade-in-up" class:visible=visible>
                "We started with our grandmother's curry leaf podi and kept going."
            </p>
            <div class="row g-4">
                {HIGHLIGHTS.into_iter().map(|(title, text)| view! {
                    <div class="col-md-4">
                        <div class="feature-card fade-in-up" class:visible=visible>
                            <h3 class="h5">{title}</h3>
                            <p class="small mb-0">{text}</p>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </Landmark>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let visible = use_site_context().revealed("contact");

    view! {
        <Landmark id="contact">
            <h2 class="fade-in-up" class:visible=visible>"Contact"</h2>
            <p class="fade-in-up" class:visible=visible>
                "Bulk orders, gifting boxes or just a question about heat levels: write to hello@dosatoppings.in."
            </p>
        </Landmark>
    }
}
