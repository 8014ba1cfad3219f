//! # View Data
//!
//! Read-only snapshots of storefront state for a presentation layer. Everything here is
//! derived: building a view never changes state, and a view is stale as soon as the next
//! intent is applied.
//!
//! All views serialize with camelCase keys; prices serialize as decimal strings.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::components::{CartButton, OpenOverlay, ProductGrid};
use crate::model::{Category, Product, ProductId};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub image: String,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Decimal>,
    /// Percentage on the discount badge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u32>,
    pub in_stock: bool,
    pub wishlisted: bool,
    pub filled_stars: u8,
    pub reviews: u32,
    pub button: CartButton,
}

impl ProductCard {
    pub fn new(product: &Product, grid: &ProductGrid) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            price: product.price,
            discount_price: product.discount_price,
            discount_percent: product.discount_percent(),
            in_stock: product.in_stock,
            wishlisted: grid.is_wishlisted(&product.id),
            filled_stars: product.filled_stars(),
            reviews: product.reviews,
            button: grid.button_for(product),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub items_label: String,
}

impl From<&Category> for CategoryCard {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            title: category.title.clone(),
            description: category.description.clone(),
            items_label: category.items_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayView {
    pub product_id: ProductId,
    pub title: String,
    pub description: String,
    pub sizes: Vec<String>,
    pub selected_size: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<Decimal>,
    pub can_confirm: bool,
    pub button: CartButton,
}

impl From<&OpenOverlay> for OverlayView {
    fn from(open: &OpenOverlay) -> Self {
        let product = &open.product;
        Self {
            product_id: product.id.clone(),
            title: product.title.clone(),
            description: product.description.clone(),
            sizes: product.sizes.labels().to_vec(),
            selected_size: open.selected_size.clone(),
            quantity: open.quantity,
            unit_price: product.effective_price(),
            total_price: open.total_price(),
            savings: product.savings(),
            can_confirm: open.can_confirm(),
            button: open.button(),
        }
    }
}

/// One mounted header badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeView {
    pub subscription: u32,
    pub count: u32,
}

/// Everything a presentation layer needs to draw the page.
///
/// `cart_count` is the authoritative total from the cart itself. Each entry in `badges` is
/// what that header instance displays, which can differ from `cart_count`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontView {
    pub products: Vec<ProductCard>,
    pub categories: Vec<CategoryCard>,
    pub overlay: Option<OverlayView>,
    pub badges: Vec<BadgeView>,
    pub cart_count: u32,
    pub cart_entries: usize,
    pub wishlist: Vec<ProductId>,
}
