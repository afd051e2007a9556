use contracts::domain::a001_product::{Catalog, CatalogQuery, CategoryFilter, GridView, SortKey};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ProductListState {
    // filters
    pub filter: CategoryFilter,

    // client sorting; `None` keeps catalog order
    pub sort: Option<SortKey>,
}

impl ProductListState {
    pub fn query(&self) -> CatalogQuery {
        CatalogQuery::new(self.filter, self.sort)
    }

    /// Applies a `#filterCategory` value; unknown values fall back to `all`.
    pub fn set_filter_value(&mut self, value: &str) {
        self.filter = value.parse().unwrap_or_else(|err| {
            log::warn!("Ignoring category filter: {err}");
            CategoryFilter::All
        });
    }

    /// Applies a `#sortBy` value; unknown values clear the sort.
    pub fn set_sort_value(&mut self, value: &str) {
        self.sort = SortKey::parse_optional(value).unwrap_or_else(|err| {
            log::warn!("Ignoring sort key: {err}");
            None
        });
    }

    pub fn filter_value(&self) -> String {
        self.filter.value().to_string()
    }

    pub fn sort_value(&self) -> String {
        self.sort.map(|k| k.value()).unwrap_or_default().to_string()
    }

    pub fn grid(&self, catalog: &Catalog, stagger_ms: u32) -> GridView {
        GridView::project(&self.query().apply(catalog.products()), stagger_ms)
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::Category;

    #[test]
    fn selector_values_round_trip_through_state() {
        let mut state = ProductListState::default();
        assert_eq!(state.filter_value(), "all");
        assert_eq!(state.sort_value(), "");

        state.set_filter_value("Fusion");
        state.set_sort_value("price-desc");
        assert_eq!(state.filter, CategoryFilter::Only(Category::Fusion));
        assert_eq!(state.sort, Some(SortKey::PriceDesc));
        assert_eq!(state.sort_value(), "price-desc");
    }

    #[test]
    fn unknown_values_fall_back_to_defaults() {
        let mut state = ProductListState::default();
        state.set_filter_value("Kids");
        state.set_filter_value("Dessert");
        state.set_sort_value("random");
        assert_eq!(state.filter, CategoryFilter::All);
        assert_eq!(state.sort, None);
    }

    #[test]
    fn grid_follows_the_query() {
        let mut state = ProductListState::default();
        state.set_filter_value("Health");
        state.set_sort_value("name-asc");
        let GridView::Cards(cards) = state.grid(&Catalog::default(), 70) else {
            panic!("expected cards");
        };
        let names: Vec<_> = cards.iter().map(|c| c.name).collect();
        assert_eq!(names, ["Flax Seed", "Horse Gram", "Moringa", "Protein Mix", "Sesame"]);
    }

    #[test]
    fn empty_catalog_gives_placeholder() {
        static NOTHING: [contracts::domain::a001_product::Product; 0] = [];
        let state = ProductListState::default();
        assert_eq!(state.grid(&Catalog::new(&NOTHING), 70), GridView::Empty);
    }
}
