pub mod state;

use self::state::create_state;
use super::card::ProductCard;
use crate::layout::global_context::use_site_context;
use crate::shared::components::ui::Select;
use contracts::domain::a001_product::{Category, GridView, SortKey};
use leptos::prelude::*;

fn filter_options() -> Vec<(&'static str, &'static str)> {
    let mut options = vec![("all", "All categories")];
    options.extend(Category::all().iter().map(|c| (c.as_str(), c.as_str())));
    options
}

fn sort_options() -> Vec<(&'static str, &'static str)> {
    let label = |key: SortKey| match key {
        SortKey::NameAsc => "Name (A-Z)",
        SortKey::NameDesc => "Name (Z-A)",
        SortKey::PriceAsc => "Price (low to high)",
        SortKey::PriceDesc => "Price (high to low)",
        SortKey::Category => "Category",
    };
    let mut options = vec![("", "Featured")];
    options.extend(SortKey::all().into_iter().map(|k| (k.value(), label(k))));
    options
}

/// Category filter, sort selector and the product grid.
///
/// The grid is rebuilt from scratch on every selector change and stays empty
/// until the preloader gate is released.
#[component]
pub fn ProductList() -> impl IntoView {
    let ctx = use_site_context();
    let state = create_state();
    let stagger_ms = ctx.config.with_value(|c| c.cards.stagger_ms);
    let catalog = ctx.catalog;

    let on_filter = Callback::new(move |value: String| {
        state.update(|s| s.set_filter_value(&value));
    });
    let on_sort = Callback::new(move |value: String| {
        state.update(|s| s.set_sort_value(&value));
    });

    let grid = move || match state.with(|s| s.grid(&catalog, stagger_ms)) {
        GridView::Empty => view! {
            <div class="col-12">
                <div class="p-4 text-center text-muted">"No products found."</div>
            </div>
        }
        .into_any(),
        GridView::Cards(cards) => cards
            .into_iter()
            .map(|card| view! { <ProductCard card=card /> })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="catalog-controls d-flex flex-wrap gap-3 mb-4">
            <Select
                id="filterCategory"
                label="Category"
                value=Signal::derive(move || state.with(|s| s.filter_value()))
                on_change=on_filter
                options=filter_options()
            />
            <Select
                id="sortBy"
                label="Sort by"
                value=Signal::derive(move || state.with(|s| s.sort_value()))
                on_change=on_sort
                options=sort_options()
            />
        </div>
        <div id="productGrid" class="row g-4">
            <Show when=move || ctx.phase().is_released()>
                {grid}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_options_match_parsers() {
        for (value, _) in filter_options() {
            assert!(value.parse::<contracts::domain::a001_product::CategoryFilter>().is_ok());
        }
        for (value, _) in sort_options() {
            assert!(SortKey::parse_optional(value).is_ok());
        }
        assert_eq!(filter_options().len(), 5);
        assert_eq!(sort_options().len(), 6);
    }
}
