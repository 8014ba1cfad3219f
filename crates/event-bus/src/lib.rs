//! # Event Bus
//!
//! This crate provides an explicit, ordered publish/subscribe channel for single-owner
//! state containers. It is the replacement for ambient, process-global event dispatch:
//! instead of "fire an event on the window and hope someone is listening", a container owns
//! an [`EventBus`] value, and both the delivery order and the subscriber lifecycle are
//! visible in the type system.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Listener Layer** ([`Listener`]) - What a subscriber does when it joins, receives an
//!    event, and leaves
//! 2. **Registry Layer** ([`EventBus`]) - The ordered subscriber list and id allocation
//! 3. **Emitter Layer** ([`Publisher`]) - The narrow interface components publish through
//!
//! ## Delivery Model
//!
//! - Delivery is **synchronous**: `publish` returns after every listener has run
//! - Listeners are called in **subscription order**
//! - Each listener gets **exactly one** delivery per publish (fan-out, not a shared counter)
//! - There is **no replay** and **no queueing**: late subscribers miss earlier events and
//!   publishing with nobody listening drops the event
//!
//! ```rust
//! use event_bus::{EventBus, Listener};
//!
//! #[derive(Default)]
//! struct Total(u32);
//!
//! impl Listener<u32> for Total {
//!     fn on_event(&mut self, event: &u32) {
//!         self.0 += event;
//!     }
//! }
//!
//! let mut bus: EventBus<u32, Total> = EventBus::new();
//! let early = bus.subscribe(Total::default());
//! bus.publish(&5);
//! let late = bus.subscribe(Total::default());
//! bus.publish(&2);
//!
//! assert_eq!(bus.listener(early).map(|t| t.0), Some(7));
//! assert_eq!(bus.listener(late).map(|t| t.0), Some(2));
//! ```
//!
//! ## Concurrency Model
//!
//! The bus is a plain value. All operations take `&mut self`, so it needs no locks; the
//! owner decides which task or thread it lives on. In the storefront it lives inside the
//! session actor, which processes one user intent at a time.
//!
//! ## Testing
//!
//! [`Recorder`] is a listener that records every event it receives. See the [`recorder`]
//! module for usage patterns.

pub mod bus;
pub mod listener;
pub mod publisher;
pub mod recorder;
pub mod subscription;
pub mod tracing;

// Re-export core types for convenience
pub use bus::EventBus;
pub use listener::Listener;
pub use publisher::{Discard, Publisher};
pub use recorder::Recorder;
pub use subscription::SubscriptionId;
