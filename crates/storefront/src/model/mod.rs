//! Pure data structures shared by the catalog, the components and the views.

pub mod cart;
pub mod category;
pub mod product;

pub use cart::*;
pub use category::*;
pub use product::*;
