use crate::layout::global_context::use_site_context;
use crate::shared::{layout_sync, smooth_scroll};
use contracts::shared::visibility::SectionId;
use leptos::prelude::*;

/// In-page navigation entries: (href, title).
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#products", "Products"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_site_context();
    let menu_open = RwSignal::new(false);

    let toggle_menu = move |_| {
        menu_open.update(|open| *open = !*open);
        layout_sync::on_menu_toggle(ctx);
    };

    view! {
        <nav class="navbar navbar-expand-lg fixed-top site-nav" class:scrolled=move || ctx.nav_scrolled.get()>
            <div class="container">
                <a
                    class="navbar-brand"
                    href="#home"
                    on:click=move |ev| smooth_scroll::follow_anchor(&ev, "#home", ctx)
                >
                    "Dosa Toppings"
                </a>
                <button
                    class="navbar-toggler"
                    type="button"
                    aria-controls="mainNav"
                    aria-expanded=move || menu_open.get().to_string()
                    aria-label="Toggle navigation"
                    on:click=toggle_menu
                >
                    <span class="navbar-toggler-icon"></span>
                </button>
                <div class="collapse navbar-collapse" class:show=move || menu_open.get() id="mainNav">
                    <ul class="navbar-nav ms-auto">
                        {NAV_LINKS.into_iter().map(|(href, title)| {
                            let target = SectionId::new(href.trim_start_matches('#'));
                            view! {
                                <li class="nav-item">
                                    <a
                                        class="nav-link"
                                        class:active=move || ctx.is_active(&target)
                                        href=href
                                        on:click=move |ev| {
                                            smooth_scroll::follow_anchor(&ev, href, ctx);
                                            if menu_open.get_untracked() {
                                                menu_open.set(false);
                                                layout_sync::on_menu_toggle(ctx);
                                            }
                                        }
                                    >
                                        {title}
                                    </a>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>
            </div>
        </nav>
    }
}
