use anyhow::bail;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Category
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Traditional,
    Health,
    Fusion,
    Kids,
}

impl Category {
    /// Selector value and display label (they coincide).
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Traditional => "Traditional",
            Category::Health => "Health",
            Category::Fusion => "Fusion",
            Category::Kids => "Kids",
        }
    }

    pub fn all() -> [Category; 4] {
        [
            Category::Traditional,
            Category::Health,
            Category::Fusion,
            Category::Kids,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the label.
impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Traditional" => Ok(Category::Traditional),
            "Health" => Ok(Category::Health),
            "Fusion" => Ok(Category::Fusion),
            "Kids" => Ok(Category::Kids),
            other => bail!("unknown category: {other:?}"),
        }
    }
}

// ============================================================================
// Product record
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub category: Category,
    /// Цена в рупиях
    pub price: u32,
    pub image: Option<&'static str>,
    pub description: &'static str,
}

impl Product {
    pub fn price_label(&self) -> String {
        format!("₹{}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_exact_labels_only() {
        for cat in Category::all() {
            assert_eq!(cat.as_str().parse::<Category>().unwrap(), cat);
        }
        assert!("health".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }
}
