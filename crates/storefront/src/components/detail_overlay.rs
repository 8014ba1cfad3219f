//! The product detail overlay: a modal that picks a size and quantity before adding to cart.
//!
//! ```text
//! Closed --open(product)--> Open { selected_size: default, quantity: 1 }
//! Open   --confirm (ok)---> Closed   (one cart entry appended, one broadcast)
//! Open   --close----------> Closed   (selection discarded)
//! ```

use event_bus::Publisher;
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::{CartButton, ProductGrid};
use crate::model::{CartItem, Product};
use crate::pricing;

/// In-progress selection for the product shown in the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenOverlay {
    pub product: Product,
    pub selected_size: String,
    pub quantity: u32,
}

impl OpenOverlay {
    /// Unit price times quantity. Size does not affect the price.
    pub fn total_price(&self) -> Decimal {
        pricing::line_total(self.product.effective_price(), self.quantity)
    }

    pub fn can_confirm(&self) -> bool {
        self.product.in_stock && !self.selected_size.is_empty()
    }

    pub fn button(&self) -> CartButton {
        if self.product.in_stock {
            CartButton::AddToCart
        } else {
            CartButton::OutOfStock
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailOverlay {
    #[default]
    Closed,
    Open(OpenOverlay),
}

impl DetailOverlay {
    /// Shows `product` with a fresh selection: its first size (or `placeholder`) and quantity 1.
    ///
    /// Opening while already open replaces the previous selection.
    pub fn open(&mut self, product: &Product, placeholder: &str) {
        let selected_size = product.sizes.default_label(placeholder).to_string();
        info!(product_id = %product.id, size = %selected_size, "Detail overlay opened");
        *self = DetailOverlay::Open(OpenOverlay {
            product: product.clone(),
            selected_size,
            quantity: 1,
        });
    }

    /// Selects one of the product's declared sizes. Other labels are ignored.
    pub fn select_size(&mut self, size: &str) -> bool {
        let DetailOverlay::Open(open) = self else {
            return false;
        };
        if !open.product.sizes.contains(size) {
            debug!(product_id = %open.product.id, size, "Undeclared size ignored");
            return false;
        }

        open.selected_size = size.to_string();
        debug!(product_id = %open.product.id, size, "Size selected");
        true
    }

    /// Adds one unit. There is no upper bound.
    pub fn increment_quantity(&mut self) -> Option<u32> {
        let open = self.as_open_mut()?;
        open.quantity = open.quantity.saturating_add(1);
        Some(open.quantity)
    }

    /// Removes one unit, never going below 1.
    pub fn decrement_quantity(&mut self) -> Option<u32> {
        let open = self.as_open_mut()?;
        open.quantity = open.quantity.saturating_sub(1).max(1);
        Some(open.quantity)
    }

    pub fn can_confirm(&self) -> bool {
        self.as_open().is_some_and(OpenOverlay::can_confirm)
    }

    /// Hands the selection to `grid` and closes the overlay.
    ///
    /// When confirming is not possible (closed, out of stock, no size) nothing happens and
    /// the overlay stays as it is.
    pub fn confirm_add_to_cart(
        &mut self,
        grid: &mut ProductGrid,
        bus: &mut impl Publisher<CartItem>,
    ) -> Option<CartItem> {
        let open = self.as_open()?;
        if !open.can_confirm() {
            debug!(product_id = %open.product.id, "Confirm ignored");
            return None;
        }

        let item = CartItem::new(
            open.product.id.clone(),
            open.selected_size.clone(),
            open.quantity,
        );
        let added = grid.add_to_cart(item, bus)?;
        *self = DetailOverlay::Closed;
        Some(added)
    }

    /// Closes the overlay, discarding any selection.
    pub fn close(&mut self) {
        if let DetailOverlay::Open(open) = self {
            debug!(product_id = %open.product.id, "Detail overlay closed");
        }
        *self = DetailOverlay::Closed;
    }

    pub fn total_price(&self) -> Option<Decimal> {
        self.as_open().map(OpenOverlay::total_price)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailOverlay::Open(_))
    }

    pub fn as_open(&self) -> Option<&OpenOverlay> {
        match self {
            DetailOverlay::Open(open) => Some(open),
            DetailOverlay::Closed => None,
        }
    }

    fn as_open_mut(&mut self) -> Option<&mut OpenOverlay> {
        match self {
            DetailOverlay::Open(open) => Some(open),
            DetailOverlay::Closed => None,
        }
    }
}
