//! # Storefront
//!
//! The state core of an e-commerce storefront page: a product catalog with a client-side
//! cart and wishlist, a product detail overlay, and header badges that follow the cart
//! through a broadcast.
//!
//! ## Core Components
//!
//! - **[model]**: Pure data structures ([`Product`](model::Product), [`CartItem`](model::CartItem), [`Category`](model::Category)).
//! - **[catalog]**: The injected fixture dataset and the sources that load it.
//! - **[components]**: The product grid, the detail overlay and the header badge.
//! - **[views]**: Serializable snapshots for a presentation layer.
//! - **[lifecycle]**: The [`Storefront`](lifecycle::Storefront) state container and the system that runs it.
//! - **[session]**: The actor and client that deliver user intents one at a time.
//!
//! ## Data Flow
//!
//! ```text
//! SessionClient --intent--> SessionActor --> Storefront
//!                                              |-- ProductGrid --publish--> EventBus<CartItem>
//!                                              |                               |-- HeaderBadge (sub_1)
//!                                              |                               `-- HeaderBadge (sub_2)
//!                                              `-- DetailOverlay --confirm--> ProductGrid
//! ```
//!
//! The cart in the grid is authoritative. Each header badge is an independent replica
//! fed only by broadcasts it was mounted for.

pub mod catalog;
pub mod components;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod pricing;
pub mod session;
pub mod views;
