//! # Session Lifecycle
//!
//! This module owns the storefront's state and the runtime that drives it.
//!
//! ## The State Container
//!
//! [`Storefront`] is the one place session state lives: catalog, product grid, detail
//! overlay and the cart bus with its mounted header badges. It has a defined
//! initialization (empty cart, empty wishlist, closed overlay, no headers) and a defined
//! teardown ([`Storefront::teardown`] closes the overlay and unmounts every header).
//!
//! ## The Orchestrator
//!
//! [`StorefrontSystem`] spawns a [`SessionActor`](crate::session::SessionActor) around a
//! `Storefront`, exposes its client, and shuts it down:
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor tears down** - overlay closed, headers unmounted, final cart logged
//! 4. **Await completion** - the task hands the storefront back
//!
//! ## Observability
//!
//! Logging is set up by [`event_bus::tracing::setup_tracing`]:
//!
//! ```bash
//! RUST_LOG=info cargo run -p storefront    # Accepted intents and lifecycle
//! RUST_LOG=debug cargo run -p storefront   # Ignored intents and full payloads
//! ```

pub mod storefront;
pub mod system;

pub use storefront::*;
pub use system::*;
