//! Фильтрация и сортировка каталога по значениям двух селекторов.

use super::aggregate::{Category, Product};
use anyhow::bail;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn value(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(cat) => cat.as_str(),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => product.category == *cat,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    Category,
}

impl SortKey {
    pub fn value(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Category => "category",
        }
    }

    pub fn all() -> [SortKey; 5] {
        [
            SortKey::NameAsc,
            SortKey::NameDesc,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::Category,
        ]
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::NameAsc => a.name.cmp(b.name),
            SortKey::NameDesc => b.name.cmp(a.name),
            SortKey::PriceAsc => a.price.cmp(&b.price),
            SortKey::PriceDesc => b.price.cmp(&a.price),
            SortKey::Category => a.category.as_str().cmp(b.category.as_str()),
        }
    }

    /// Parses a selector value; the empty string means "no sorting".
    pub fn parse_optional(s: &str) -> anyhow::Result<Option<SortKey>> {
        if s.is_empty() {
            return Ok(None);
        }
        s.parse().map(Some)
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name-asc" => Ok(SortKey::NameAsc),
            "name-desc" => Ok(SortKey::NameDesc),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "category" => Ok(SortKey::Category),
            other => bail!("unknown sort key: {other:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogQuery {
    pub filter: CategoryFilter,
    pub sort: Option<SortKey>,
}

impl CatalogQuery {
    pub fn new(filter: CategoryFilter, sort: Option<SortKey>) -> Self {
        Self { filter, sort }
    }

    /// Builds a fresh view list: filter first, then a stable sort.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut list: Vec<Product> = products
            .iter()
            .filter(|p| self.filter.matches(p))
            .copied()
            .collect();

        if let Some(key) = self.sort {
            list.sort_by(|a, b| key.compare(a, b));
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::catalog::CATALOG;
    use crate::domain::a001_product::ProductId;

    fn names(list: &[Product]) -> Vec<&'static str> {
        list.iter().map(|p| p.name).collect()
    }

    #[test]
    fn all_passes_everything_through_in_catalog_order() {
        let list = CatalogQuery::default().apply(&CATALOG);
        assert_eq!(list, CATALOG.to_vec());
    }

    #[test]
    fn filter_yields_only_that_category() {
        for cat in Category::all() {
            let list = CatalogQuery::new(CategoryFilter::Only(cat), None).apply(&CATALOG);
            assert_eq!(list.len(), 5);
            assert!(list.iter().all(|p| p.category == cat));
        }
    }

    #[test]
    fn health_sorted_by_name() {
        let query = CatalogQuery::new(
            CategoryFilter::Only(Category::Health),
            Some(SortKey::NameAsc),
        );
        assert_eq!(
            names(&query.apply(&CATALOG)),
            vec!["Flax Seed", "Horse Gram", "Moringa", "Protein Mix", "Sesame"]
        );
    }

    #[test]
    fn price_desc_reverses_price_asc_without_ties() {
        // Health prices are pairwise distinct.
        let filter = CategoryFilter::Only(Category::Health);
        let asc = CatalogQuery::new(filter, Some(SortKey::PriceAsc)).apply(&CATALOG);
        let mut desc = CatalogQuery::new(filter, Some(SortKey::PriceDesc)).apply(&CATALOG);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn ties_keep_catalog_order() {
        // Garlic (2) and Sesame (9) both cost 110; Idli Dosa (3) and Mild Garlic (18) cost 95.
        let list = CatalogQuery::new(CategoryFilter::All, Some(SortKey::PriceAsc)).apply(&CATALOG);
        let pos = |id: u32| list.iter().position(|p| p.id == ProductId(id)).unwrap();
        assert!(pos(2) < pos(9));
        assert!(pos(3) < pos(18));

        let list = CatalogQuery::new(CategoryFilter::All, Some(SortKey::Category)).apply(&CATALOG);
        let fusion: Vec<u32> = list
            .iter()
            .filter(|p| p.category == Category::Fusion)
            .map(|p| p.id.value())
            .collect();
        assert_eq!(fusion, vec![11, 12, 13, 14, 15]);
        assert_eq!(list[0].category, Category::Fusion);
        assert_eq!(list[19].category, Category::Traditional);
    }

    #[test]
    fn selector_values_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Kids".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Kids)
        );
        assert!("kids".parse::<CategoryFilter>().is_err());

        assert_eq!(SortKey::parse_optional("").unwrap(), None);
        for key in SortKey::all() {
            assert_eq!(SortKey::parse_optional(key.value()).unwrap(), Some(key));
        }
        assert!(SortKey::parse_optional("price").is_err());
    }

    #[test]
    fn filter_on_empty_input_is_empty() {
        let query = CatalogQuery::new(CategoryFilter::Only(Category::Kids), Some(SortKey::NameDesc));
        assert!(query.apply(&[]).is_empty());
    }
}
