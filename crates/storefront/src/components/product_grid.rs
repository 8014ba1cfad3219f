//! # Product Grid
//!
//! The catalog display and the state it owns: the authoritative cart list and the wishlist.
//!
//! Every successful add, whether a quick-add from a card or a confirmed add from the detail
//! overlay, appends one [`CartItem`] and publishes exactly one broadcast carrying it.
//! Nothing else the grid does has an effect outside of it.
//!
//! Intents that cannot be honored (unknown product, out of stock, no size selected) are not
//! errors: the grid leaves its state untouched, publishes nothing and returns `None`.

use std::collections::BTreeSet;

use event_bus::Publisher;
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::model::{CartItem, Product, ProductId};

/// Label of the add-to-cart button on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CartButton {
    #[serde(rename = "Added to Cart")]
    AddedToCart,
    #[serde(rename = "Add to Cart")]
    AddToCart,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl CartButton {
    pub fn as_str(self) -> &'static str {
        match self {
            CartButton::AddedToCart => "Added to Cart",
            CartButton::AddToCart => "Add to Cart",
            CartButton::OutOfStock => "Out of Stock",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProductGrid {
    cart: Vec<CartItem>,
    wishlist: BTreeSet<ProductId>,
    placeholder_size: String,
}

impl ProductGrid {
    /// Creates a grid with an empty cart and wishlist.
    ///
    /// # Arguments
    /// * `placeholder_size` - Size label used for products that declare no sizes
    pub fn new(placeholder_size: impl Into<String>) -> Self {
        Self {
            cart: Vec::new(),
            wishlist: BTreeSet::new(),
            placeholder_size: placeholder_size.into(),
        }
    }

    /// Adds one unit of `product_id` in its default size, bypassing the detail overlay.
    ///
    /// Ignored when the product is unknown or out of stock.
    pub fn quick_add_to_cart(
        &mut self,
        catalog: &Catalog,
        product_id: &ProductId,
        bus: &mut impl Publisher<CartItem>,
    ) -> Option<CartItem> {
        let Some(product) = catalog.find(product_id) else {
            debug!(%product_id, "Quick add ignored: unknown product");
            return None;
        };
        if !product.in_stock {
            debug!(%product_id, "Quick add ignored: out of stock");
            return None;
        }

        let size = product.sizes.default_label(&self.placeholder_size);
        let item = CartItem::new(product.id.clone(), size, 1);
        self.add_to_cart(item, bus)
    }

    /// Appends `item` verbatim and broadcasts it.
    ///
    /// Ignored when the item carries no size or a zero quantity.
    pub fn add_to_cart(
        &mut self,
        item: CartItem,
        bus: &mut impl Publisher<CartItem>,
    ) -> Option<CartItem> {
        if item.size.is_empty() {
            debug!(product_id = %item.product_id, "Add to cart ignored: no size selected");
            return None;
        }
        if item.quantity == 0 {
            debug!(product_id = %item.product_id, "Add to cart ignored: zero quantity");
            return None;
        }

        info!(
            product_id = %item.product_id,
            size = %item.size,
            quantity = item.quantity,
            entries = self.cart.len() + 1,
            "Added to cart"
        );
        self.cart.push(item.clone());
        bus.publish(&item);
        Some(item)
    }

    /// Flips wishlist membership for `product_id` and returns the new membership.
    pub fn toggle_wishlist(&mut self, product_id: &ProductId) -> bool {
        let wishlisted = if self.wishlist.remove(product_id) {
            false
        } else {
            self.wishlist.insert(product_id.clone());
            true
        };
        info!(%product_id, wishlisted, "Wishlist toggled");
        wishlisted
    }

    /// Whether any cart entry references `product_id`, whatever its size or quantity.
    pub fn is_product_in_cart(&self, product_id: &ProductId) -> bool {
        self.cart.iter().any(|item| &item.product_id == product_id)
    }

    pub fn is_wishlisted(&self, product_id: &ProductId) -> bool {
        self.wishlist.contains(product_id)
    }

    pub fn cart_items(&self) -> &[CartItem] {
        &self.cart
    }

    /// Wishlisted product ids, in id order.
    pub fn wishlist(&self) -> impl Iterator<Item = &ProductId> {
        self.wishlist.iter()
    }

    /// Total units across every cart entry.
    pub fn cart_quantity(&self) -> u32 {
        self.cart
            .iter()
            .fold(0u32, |total, item| total.saturating_add(item.quantity))
    }

    /// Total units of `product_id` across all of its entries.
    pub fn quantity_for(&self, product_id: &ProductId) -> u32 {
        self.cart
            .iter()
            .filter(|item| &item.product_id == product_id)
            .fold(0u32, |total, item| total.saturating_add(item.quantity))
    }

    pub fn button_for(&self, product: &Product) -> CartButton {
        if self.is_product_in_cart(&product.id) {
            CartButton::AddedToCart
        } else if product.in_stock {
            CartButton::AddToCart
        } else {
            CartButton::OutOfStock
        }
    }

    pub fn placeholder_size(&self) -> &str {
        &self.placeholder_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_bus::{Discard, EventBus, Recorder};
    use rust_decimal::Decimal;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Product::new("1", "Headphones", Decimal::new(29999, 2), "Electronics")
                    .with_discount(Decimal::new(19999, 2))
                    .with_sizes(["One Size"]),
                Product::new("2", "Watch", Decimal::new(24999, 2), "Electronics")
                    .with_sizes(["38mm", "42mm", "44mm"]),
                Product::new("4", "Lens", Decimal::new(59999, 2), "Electronics")
                    .with_sizes(["50mm", "85mm"])
                    .out_of_stock(),
                Product::new("9", "Hub", Decimal::new(14999, 2), "Electronics"),
            ],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_quick_add_appends_and_broadcasts_once() {
        let catalog = catalog();
        let mut grid = ProductGrid::new("Standard");
        let mut bus: EventBus<CartItem, Recorder<CartItem>> = EventBus::new();
        let listener = bus.subscribe(Recorder::new());

        let added = grid.quick_add_to_cart(&catalog, &ProductId::from("1"), &mut bus);

        let expected = CartItem::new("1", "One Size", 1);
        assert_eq!(added, Some(expected.clone()));
        assert_eq!(grid.cart_items(), &[expected.clone()]);
        assert_eq!(bus.listener(listener).unwrap().events(), &[expected]);
    }

    #[test]
    fn test_quick_add_out_of_stock_is_ignored() {
        let catalog = catalog();
        let mut grid = ProductGrid::new("Standard");
        let mut bus: EventBus<CartItem, Recorder<CartItem>> = EventBus::new();
        let listener = bus.subscribe(Recorder::new());

        assert_eq!(
            grid.quick_add_to_cart(&catalog, &ProductId::from("4"), &mut bus),
            None
        );
        assert_eq!(
            grid.quick_add_to_cart(&catalog, &ProductId::from("404"), &mut bus),
            None
        );

        assert!(grid.cart_items().is_empty());
        assert!(bus.listener(listener).unwrap().events().is_empty());
    }

    #[test]
    fn test_quick_add_unsized_uses_placeholder() {
        let catalog = catalog();
        let mut grid = ProductGrid::new("Standard");

        let added = grid.quick_add_to_cart(&catalog, &ProductId::from("9"), &mut Discard);
        assert_eq!(added.map(|item| item.size), Some("Standard".to_string()));
    }

    #[test]
    fn test_duplicate_adds_are_not_merged() {
        let catalog = catalog();
        let mut grid = ProductGrid::new("Standard");
        let id = ProductId::from("2");

        grid.quick_add_to_cart(&catalog, &id, &mut Discard);
        grid.quick_add_to_cart(&catalog, &id, &mut Discard);
        grid.add_to_cart(CartItem::new("2", "38mm", 3), &mut Discard);

        assert_eq!(grid.cart_items().len(), 3);
        assert_eq!(grid.quantity_for(&id), 5);
        assert_eq!(grid.cart_quantity(), 5);
    }

    #[test]
    fn test_cart_quantity_saturates() {
        let mut grid = ProductGrid::new("Standard");
        let id = ProductId::from("2");

        grid.add_to_cart(CartItem::new("2", "42mm", u32::MAX), &mut Discard);
        grid.add_to_cart(CartItem::new("2", "42mm", 1), &mut Discard);

        assert_eq!(grid.cart_items().len(), 2);
        assert_eq!(grid.cart_quantity(), u32::MAX);
        assert_eq!(grid.quantity_for(&id), u32::MAX);
    }

    #[test]
    fn test_add_to_cart_requires_size_and_quantity() {
        let mut grid = ProductGrid::new("Standard");
        let mut bus: EventBus<CartItem, Recorder<CartItem>> = EventBus::new();
        let listener = bus.subscribe(Recorder::new());

        assert_eq!(grid.add_to_cart(CartItem::new("2", "", 1), &mut bus), None);
        assert_eq!(
            grid.add_to_cart(CartItem::new("2", "42mm", 0), &mut bus),
            None
        );

        assert!(grid.cart_items().is_empty());
        assert!(bus.listener(listener).unwrap().events().is_empty());
    }

    #[test]
    fn test_toggle_wishlist_twice_restores_membership() {
        let mut grid = ProductGrid::new("Standard");
        let id = ProductId::from("5");
        grid.toggle_wishlist(&ProductId::from("1"));
        let before: Vec<ProductId> = grid.wishlist().cloned().collect();

        assert!(grid.toggle_wishlist(&id));
        assert!(grid.is_wishlisted(&id));
        assert!(!grid.toggle_wishlist(&id));

        let after: Vec<ProductId> = grid.wishlist().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_button_labels() {
        let catalog = catalog();
        let mut grid = ProductGrid::new("Standard");
        let headphones = catalog.find(&ProductId::from("1")).unwrap();
        let lens = catalog.find(&ProductId::from("4")).unwrap();

        assert_eq!(grid.button_for(headphones), CartButton::AddToCart);
        assert_eq!(grid.button_for(lens), CartButton::OutOfStock);

        grid.quick_add_to_cart(&catalog, &headphones.id, &mut Discard);
        assert_eq!(grid.button_for(headphones), CartButton::AddedToCart);
        assert_eq!(CartButton::AddedToCart.as_str(), "Added to Cart");
    }
}
