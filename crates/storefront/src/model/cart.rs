//! One line of the cart, and the payload of every cart broadcast.

use serde::{Deserialize, Serialize};

use super::ProductId;

/// A `(product, size, quantity)` entry.
///
/// Entries are never merged: adding the same product and size twice appends a second
/// entry, and the total for a product is the sum across all of its entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub size: String,
    pub quantity: u32,
}

impl CartItem {
    /// Creates a new CartItem.
    ///
    /// # Arguments
    /// * `product_id` - Product this entry references
    /// * `size` - Selected size label (or the placeholder for unsized products)
    /// * `quantity` - Number of units, expected to be positive
    pub fn new(product_id: impl Into<ProductId>, size: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            size: size.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let item = CartItem::new("1", "One Size", 1);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "productId": "1", "size": "One Size", "quantity": 1 })
        );
    }
}
