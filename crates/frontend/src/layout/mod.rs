pub mod footer;
pub mod global_context;
pub mod header;
pub mod preloader;
pub mod sections;

use global_context::use_site_context;
use leptos::prelude::*;
use preloader::Preloader;
use sections::{AboutSection, ContactSection, ProductsSection};

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |  Preloader (until removed)               |
/// +------------------------------------------+
/// |  Navbar (fixed)                          |
/// +------------------------------------------+
/// |  main: header#home, #products,           |
/// |        #about, #contact                  |
/// +------------------------------------------+
/// |  Footer + go-top                         |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_site_context();

    view! {
        <Preloader />
        <header::Navbar />
        <main style:padding-top=move || format!("{}px", ctx.nav_height.get().main_padding_top())>
            <header::Header />
            <ProductsSection />
            <AboutSection />
            <ContactSection />
        </main>
        <footer::Footer />
    }
}
