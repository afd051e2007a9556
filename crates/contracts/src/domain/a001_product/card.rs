//! Проекция списка товаров в модель сетки карточек.

use super::aggregate::{Product, ProductId};
use super::catalog::features_for;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    Asset(&'static str),
    /// Placeholder text when the record has no image.
    Initials(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub id: ProductId,
    pub name: &'static str,
    pub category: &'static str,
    pub price_label: String,
    pub image: CardImage,
    pub description: &'static str,
    pub features: [&'static str; 3],
    /// Entrance animation delay (stagger).
    pub delay_ms: u32,
}

impl CardModel {
    pub fn from_product(product: &Product, index: usize, stagger_ms: u32) -> Self {
        let image = match product.image {
            Some(uri) if !uri.is_empty() => CardImage::Asset(uri),
            _ => CardImage::Initials(initials(product.name)),
        };

        Self {
            id: product.id,
            name: product.name,
            category: product.category.as_str(),
            price_label: product.price_label(),
            image,
            description: product.description,
            features: features_for(product.id),
            delay_ms: stagger_ms.saturating_mul(index as u32),
        }
    }

    pub fn aria_label(&self) -> String {
        format!("{} - product card", self.name)
    }

    pub fn footnote(&self) -> String {
        format!("Category: {} | Price: {}", self.category, self.price_label)
    }
}

/// What the product grid shows for a given view list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    Empty,
    Cards(Vec<CardModel>),
}

impl GridView {
    pub fn project(list: &[Product], stagger_ms: u32) -> Self {
        if list.is_empty() {
            return GridView::Empty;
        }
        GridView::Cards(
            list.iter()
                .enumerate()
                .map(|(i, p)| CardModel::from_product(p, i, stagger_ms))
                .collect(),
        )
    }

    pub fn card_count(&self) -> usize {
        match self {
            GridView::Empty => 0,
            GridView::Cards(cards) => cards.len(),
        }
    }
}

/// Two or three uppercase letters for the image placeholder.
///
/// Multi-word names take the first letter of up to three words; a single
/// word contributes its first two letters. A name that is a single letter
/// has nothing to pad with and yields just that letter; blank names get `?`.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    match words.as_slice() {
        [] => "?".to_string(),
        [single] => single.chars().take(2).flat_map(char::to_uppercase).collect(),
        many => many
            .iter()
            .take(3)
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::Category;
    use crate::domain::a001_product::catalog::CATALOG;

    #[test]
    fn empty_list_projects_to_placeholder() {
        let view = GridView::project(&[], 70);
        assert_eq!(view, GridView::Empty);
        assert_eq!(view.card_count(), 0);
    }

    #[test]
    fn cards_keep_input_order_and_ids() {
        let list = [CATALOG[4], CATALOG[0], CATALOG[17]];
        let GridView::Cards(cards) = GridView::project(&list, 70) else {
            panic!("expected cards");
        };
        let ids: Vec<u32> = cards.iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, vec![5, 1, 18]);
        let delays: Vec<u32> = cards.iter().map(|c| c.delay_ms).collect();
        assert_eq!(delays, vec![0, 70, 140]);
        assert_eq!(cards[0].price_label, "₹120");
        assert_eq!(cards[0].image, CardImage::Asset("assets/podi-5.png"));
    }

    #[test]
    fn missing_image_falls_back_to_initials() {
        let product = Product {
            id: ProductId(42),
            name: "Sweet Protein Mix",
            category: Category::Kids,
            price: 140,
            image: None,
            description: "",
        };
        let card = CardModel::from_product(&product, 0, 70);
        assert_eq!(card.image, CardImage::Initials("SPM".to_string()));
        assert_eq!(card.features[0], "Small-batch roasted");
        assert_eq!(card.footnote(), "Category: Kids | Price: ₹140");
    }

    #[test]
    fn initials_rules() {
        assert_eq!(initials("Moringa"), "MO");
        assert_eq!(initials("Horse Gram"), "HG");
        assert_eq!(initials("One Two Three Four"), "OTT");
        assert_eq!(initials("   "), "?");
        assert_eq!(initials("a"), "A");
    }
}
