//! Represents a product in the storefront catalog.
//!
//! Products are immutable fixture data: they are loaded once by a
//! [`CatalogSource`](crate::catalog::CatalogSource) and never created or destroyed while a
//! session runs.
//!
//! See [`Sizes`] for how products without declared sizes are handled.
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

use crate::pricing;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The sizes a product can be ordered in.
///
/// A product either declares an ordered, non-empty list of size labels, or declares none
/// at all. An `Unsized` product still needs *some* label on its cart entries, so it always
/// resolves to the session's placeholder label (see
/// [`StorefrontConfig::placeholder_size`](crate::config::StorefrontConfig::placeholder_size)).
///
/// Deserialized from a plain list: `[]` becomes `Unsized`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub enum Sizes {
    /// Declared labels, in display order.
    Sized(Vec<String>),
    #[default]
    Unsized,
}

impl Sizes {
    /// Declared labels; empty for `Unsized`.
    pub fn labels(&self) -> &[String] {
        match self {
            Sizes::Sized(labels) => labels,
            Sizes::Unsized => &[],
        }
    }

    /// The label a new selection starts with: the first declared size, or `placeholder`.
    pub fn default_label<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.labels().first().map_or(placeholder, String::as_str)
    }

    /// Whether `label` is one of the declared sizes. The placeholder never matches.
    pub fn contains(&self, label: &str) -> bool {
        self.labels().iter().any(|size| size == label)
    }

    pub fn is_sized(&self) -> bool {
        matches!(self, Sizes::Sized(_))
    }
}

impl From<Vec<String>> for Sizes {
    fn from(labels: Vec<String>) -> Self {
        if labels.is_empty() {
            Sizes::Unsized
        } else {
            Sizes::Sized(labels)
        }
    }
}

impl From<Sizes> for Vec<String> {
    fn from(sizes: Sizes) -> Self {
        match sizes {
            Sizes::Sized(labels) => labels,
            Sizes::Unsized => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Decimal>,
    pub image: String,
    /// Average rating, 0 to 5.
    pub rating: f32,
    pub reviews: u32,
    pub category: String,
    pub in_stock: bool,
    #[serde(default)]
    pub sizes: Sizes,
}

impl Product {
    /// Creates a new in-stock Product without a discount, image, reviews or sizes.
    ///
    /// # Arguments
    /// * `id` - Unique identifier within the catalog
    /// * `title` - Display title
    /// * `price` - Base price
    /// * `category` - Category label shown on the card
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            price,
            discount_price: None,
            image: String::new(),
            rating: 0.0,
            reviews: 0,
            category: category.into(),
            in_stock: true,
            sizes: Sizes::Unsized,
        }
    }

    pub fn with_discount(mut self, discount_price: Decimal) -> Self {
        self.discount_price = Some(discount_price);
        self
    }

    pub fn with_sizes<S: Into<String>>(mut self, sizes: impl IntoIterator<Item = S>) -> Self {
        self.sizes = Sizes::from(sizes.into_iter().map(Into::into).collect::<Vec<_>>());
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// The price actually charged: the discount price when present, else the base price.
    pub fn effective_price(&self) -> Decimal {
        self.discount_price.unwrap_or(self.price)
    }

    /// Percentage shown on the discount badge, if the product is discounted.
    pub fn discount_percent(&self) -> Option<u32> {
        self.discount_price
            .and_then(|discounted| pricing::calculate_discount(self.price, discounted))
    }

    /// Amount saved per unit, rounded to cents. `None` without a discount.
    pub fn savings(&self) -> Option<Decimal> {
        self.discount_price
            .map(|discounted| (self.price - discounted).round_dp(2))
    }

    /// Number of filled stars out of five: the rating rounded down.
    pub fn filled_stars(&self) -> u8 {
        // Truncation is intended; the rating is clamped into 0..=5 first.
        self.rating.clamp(0.0, 5.0).floor() as u8
    }
}
