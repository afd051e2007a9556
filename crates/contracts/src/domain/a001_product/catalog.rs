//! Статический каталог: двадцать позиций, по пять в каждой категории.

use super::aggregate::{Category, Product, ProductId};

pub static CATALOG: [Product; 20] = [
    // Traditional
    Product {
        id: ProductId(1),
        name: "Curry Leaves",
        category: Category::Traditional,
        price: 100,
        image: Some("assets/podi-1.png"),
        description: "Fragrant, classic powdered blend to lift dosa, idli and rice.",
    },
    Product {
        id: ProductId(2),
        name: "Garlic",
        category: Category::Traditional,
        price: 110,
        image: Some("assets/podi-2.png"),
        description: "Savory garlic punch — pairs beautifully with ghee dosa.",
    },
    Product {
        id: ProductId(3),
        name: "Idli Dosa",
        category: Category::Traditional,
        price: 95,
        image: Some("assets/podi-3.png"),
        description: "Classic seasoning made for idli & dosa — mild and nutty.",
    },
    Product {
        id: ProductId(4),
        name: "Coriander",
        category: Category::Traditional,
        price: 105,
        image: Some("assets/podi-4.png"),
        description: "Fresh, green notes — a twist to everyday dosa and rice bowls.",
    },
    Product {
        id: ProductId(5),
        name: "Tamarind Rice",
        category: Category::Traditional,
        price: 120,
        image: Some("assets/podi-5.png"),
        description: "Sour-sweet spice mix inspired by tamarind rice.",
    },
    // Health
    Product {
        id: ProductId(6),
        name: "Flax Seed",
        category: Category::Health,
        price: 140,
        image: Some("assets/podi-6.png"),
        description: "Rich in Omega-3 & fiber — crunchy, nutty podi.",
    },
    Product {
        id: ProductId(7),
        name: "Horse Gram",
        category: Category::Health,
        price: 130,
        image: Some("assets/podi-7.png"),
        description: "Protein-rich and earthy — developed for nourishment.",
    },
    Product {
        id: ProductId(8),
        name: "Moringa",
        category: Category::Health,
        price: 145,
        image: Some("assets/podi-8.png"),
        description: "Supergreen nutrition in a sprinkle — earthy and nutritious.",
    },
    Product {
        id: ProductId(9),
        name: "Sesame",
        category: Category::Health,
        price: 110,
        image: Some("assets/podi-9.png"),
        description: "Nutty, fragrant sesame to add crunch and calcium.",
    },
    Product {
        id: ProductId(10),
        name: "Protein Mix",
        category: Category::Health,
        price: 160,
        image: Some("assets/podi-10.png"),
        description: "Pulse-forward blend designed for extra protein.",
    },
    // Fusion
    Product {
        id: ProductId(11),
        name: "Pepper Garlic",
        category: Category::Fusion,
        price: 125,
        image: Some("assets/podi-11.png"),
        description: "Bold pepper and roasted garlic for millet & pancakes.",
    },
    Product {
        id: ProductId(12),
        name: "Spicy Millet",
        category: Category::Fusion,
        price: 135,
        image: Some("assets/podi-12.png"),
        description: "Millet-forward podi with chilli & herbs.",
    },
    Product {
        id: ProductId(13),
        name: "Herb Chilli",
        category: Category::Fusion,
        price: 120,
        image: Some("assets/podi-13.png"),
        description: "Aromatic herbs meet gentle chilli.",
    },
    Product {
        id: ProductId(14),
        name: "Lentil Mix",
        category: Category::Fusion,
        price: 150,
        image: Some("assets/podi-14.png"),
        description: "Protein-rich lentil blend with warm spices.",
    },
    Product {
        id: ProductId(15),
        name: "Tomato Burst",
        category: Category::Fusion,
        price: 115,
        image: Some("assets/podi-15.png"),
        description: "Tangy tomato notes for bright modern flavor.",
    },
    // Kids
    Product {
        id: ProductId(16),
        name: "Choco Nut",
        category: Category::Kids,
        price: 130,
        image: Some("assets/podi-16.png"),
        description: "Sweet cocoa-nut mix kids love — great on pancakes.",
    },
    Product {
        id: ProductId(17),
        name: "Sweet Protein Mix",
        category: Category::Kids,
        price: 140,
        image: Some("assets/podi-17.png"),
        description: "Mildly sweet, protein-rich blend for children.",
    },
    Product {
        id: ProductId(18),
        name: "Mild Garlic",
        category: Category::Kids,
        price: 95,
        image: Some("assets/podi-18.png"),
        description: "Gentle garlic flavor tuned for younger taste buds.",
    },
    Product {
        id: ProductId(19),
        name: "Peanut Crunch",
        category: Category::Kids,
        price: 120,
        image: Some("assets/podi-19.png"),
        description: "Crispy peanuts and mild spices — a little one favourite.",
    },
    Product {
        id: ProductId(20),
        name: "Sprout Mix",
        category: Category::Kids,
        price: 150,
        image: Some("assets/podi-20.png"),
        description: "Sprout-based mix to sneak in extra nutrition.",
    },
];

const GENERIC_FEATURES: [&str; 3] = [
    "Small-batch roasted",
    "Stone-ground texture",
    "Perfect for dosa & rice",
];

/// Three feature bullets shown on the back of a card.
pub fn features_for(id: ProductId) -> [&'static str; 3] {
    match id.0 {
        1 => ["Fresh curry leaf aroma", "No artificial flavours", "Perfect with ghee dosa"],
        2 => ["Bold roasted garlic", "Aromatic & savory", "Pairs with sesame oil"],
        3 => ["Classic idli seasoning", "Light & nutty", "Family favourite"],
        4 => ["Bright coriander notes", "Freshens rice & dosa", "Roasted for depth"],
        5 => ["Tamarind tang & spice", "Sour-sweet balance", "Great with rice"],
        6 => ["Omega-3 rich crunch", "Boosts heart health", "Nutty texture"],
        7 => ["High-protein podi", "Earthy roasted flavour", "Satiety boosting"],
        8 => ["Moringa goodness", "Vitamin-rich sprinkle", "Mild green taste"],
        9 => ["Toasted sesame crunch", "Good calcium source", "Adds texture"],
        10 => ["Pulse-forward protein mix", "Balanced spice profile", "Meal-ready nutrition"],
        11 => ["Peppery heat & garlic", "Works on millet dosa", "Bold flavour"],
        12 => ["Millet-friendly spice", "Slight smoky notes", "Great with porridge/pancakes"],
        13 => ["Herbal aroma & mild chilli", "Versatile use", "Subtle heat"],
        14 => ["Lentil-based protein", "Creamy roasted texture", "Nutritious sprinkle"],
        15 => ["Tomato tang & brightness", "Kid-friendly", "Adds color & zing"],
        16 => ["Choco-nut sweetness", "Kid-approved flavour", "Great on pancakes"],
        17 => ["Mild sweet protein", "Energy-packed", "Mixes well with milk/yogurt"],
        18 => ["Gentle garlic flavor", "Kid-friendly spice", "Mild & tasty"],
        19 => ["Crunchy peanut bits", "Good protein source", "Crunch kids love"],
        20 => ["Sprout goodness", "High in enzymes", "Healthy everyday sprinkle"],
        _ => GENERIC_FEATURES,
    }
}

/// Immutable view over a product list, handed to components as configuration.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    products: &'static [Product],
}

impl Catalog {
    pub fn new(products: &'static [Product]) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &'static [Product] {
        self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&'static Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(&CATALOG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_twenty_unique_ids() {
        let ids: HashSet<_> = CATALOG.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 20);
        assert!(CATALOG.iter().all(|p| (1..=20).contains(&p.id.value())));
    }

    #[test]
    fn five_products_per_category() {
        for cat in Category::all() {
            let count = CATALOG.iter().filter(|p| p.category == cat).count();
            assert_eq!(count, 5, "{cat}");
        }
    }

    #[test]
    fn unknown_id_gets_generic_features() {
        assert_eq!(features_for(ProductId(99)), GENERIC_FEATURES);
        assert_eq!(features_for(ProductId(8))[0], "Moringa goodness");
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::default();
        assert_eq!(catalog.get(ProductId(7)).map(|p| p.name), Some("Horse Gram"));
        assert!(catalog.get(ProductId(0)).is_none());
    }
}
