//! # Catalog
//!
//! The fixed product and category lists the storefront displays. A [`Catalog`] is built
//! once from a [`CatalogSource`] and then only read: nothing in a session mutates it.
//!
//! ## Validation
//!
//! [`Catalog::new`] enforces the data-model invariants up front so the components can rely
//! on them:
//! - product ids are unique
//! - a discount price never exceeds the base price, and is never applied to a zero price
//! - ratings are between 0 and 5

pub mod error;
pub mod source;

pub use error::*;
pub use source::*;

use std::collections::HashSet;

use serde::Deserialize;

use crate::model::{Category, Product, ProductId};

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

/// Wire shape of a catalog fixture file.
#[derive(Debug, Deserialize)]
struct CatalogFixture {
    #[serde(default)]
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a validated catalog.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if a product id repeats, a discount is invalid or a
    /// rating is out of range.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
            if let Some(discounted) = product.discount_price {
                if product.price.is_zero() || discounted > product.price {
                    return Err(CatalogError::InvalidDiscount(product.id.clone()));
                }
            }
            if !(0.0..=5.0).contains(&product.rating) {
                return Err(CatalogError::InvalidRating {
                    id: product.id.clone(),
                    rating: product.rating,
                });
            }
        }

        Ok(Self {
            products,
            categories,
        })
    }

    /// Parses and validates a JSON fixture (`{"categories": [...], "products": [...]}`).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let fixture: CatalogFixture = serde_json::from_str(json)?;
        Self::new(fixture.products, fixture.categories)
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Products whose category label matches `label`, ignoring case, in catalog order.
    pub fn products_in_category<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products
            .iter()
            .filter(move |product| product.category.eq_ignore_ascii_case(label))
    }

    /// Distinct product category labels, in first-seen order.
    pub fn category_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for product in &self.products {
            if !labels.contains(&product.category.as_str()) {
                labels.push(&product.category);
            }
        }
        labels
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str, category: &str) -> Product {
        Product::new(id, format!("Product {id}"), Decimal::from(10), category)
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = Catalog::new(vec![product("1", "Home"), product("1", "Home")], vec![]);
        match result {
            Err(CatalogError::DuplicateProduct(id)) => assert_eq!(id.as_str(), "1"),
            other => panic!("expected a duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_discount_above_price_is_rejected() {
        let bad = product("1", "Home").with_discount(Decimal::from(11));
        let result = Catalog::new(vec![bad], vec![]);
        assert!(matches!(result, Err(CatalogError::InvalidDiscount(_))));
    }

    #[test]
    fn test_discount_on_free_product_is_rejected() {
        let mut free = product("1", "Home").with_discount(Decimal::ZERO);
        free.price = Decimal::ZERO;
        assert!(matches!(
            Catalog::new(vec![free], vec![]),
            Err(CatalogError::InvalidDiscount(_))
        ));
    }

    #[test]
    fn test_rating_out_of_range_is_rejected() {
        let mut loud = product("1", "Home");
        loud.rating = 5.5;
        assert!(matches!(
            Catalog::new(vec![loud], vec![]),
            Err(CatalogError::InvalidRating { .. })
        ));
    }

    #[test]
    fn test_category_filtering_ignores_case() {
        let catalog = Catalog::new(
            vec![
                product("1", "Electronics"),
                product("2", "Home"),
                product("3", "electronics"),
            ],
            vec![],
        )
        .unwrap();

        let ids: Vec<&str> = catalog
            .products_in_category("ELECTRONICS")
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(
            catalog.category_labels(),
            vec!["Electronics", "Home", "electronics"]
        );
    }

    #[test]
    fn test_from_json_requires_products() {
        assert!(matches!(
            Catalog::from_json(r#"{"categories": []}"#),
            Err(CatalogError::Json(_))
        ));
    }
}
