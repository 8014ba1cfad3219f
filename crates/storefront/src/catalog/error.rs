//! Error types for catalog loading.

use thiserror::Error;

use crate::model::ProductId;

/// Errors that can occur while loading or validating a catalog fixture.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The fixture file could not be read.
    #[error("Failed to read catalog fixture: {0}")]
    Io(#[from] std::io::Error),

    /// The fixture is not valid JSON for a catalog.
    #[error("Failed to parse catalog fixture: {0}")]
    Json(#[from] serde_json::Error),

    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// A discount price is above the base price, or applied to a zero base price.
    #[error("Invalid discount for product {0}")]
    InvalidDiscount(ProductId),

    /// A rating outside 0 to 5.
    #[error("Invalid rating {rating} for product {id}")]
    InvalidRating { id: ProductId, rating: f32 },
}
