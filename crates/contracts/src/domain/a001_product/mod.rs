pub mod aggregate;
pub mod card;
pub mod catalog;
pub mod query;

pub use aggregate::{Category, Product, ProductId};
pub use card::{CardImage, CardModel, GridView};
pub use catalog::{features_for, Catalog, CATALOG};
pub use query::{CatalogQuery, CategoryFilter, SortKey};
