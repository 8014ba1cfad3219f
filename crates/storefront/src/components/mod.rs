pub mod detail_overlay;
pub mod header_badge;
pub mod product_grid;

pub use detail_overlay::*;
pub use header_badge::*;
pub use product_grid::*;
