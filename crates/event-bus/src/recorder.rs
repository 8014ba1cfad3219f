//! # Recording Listener & Testing Guide
//!
//! The `Recorder<E>` type is a [`Listener`] that keeps every event it receives together with
//! its subscription lifecycle. It lets tests assert *exactly* what a component broadcast
//! without standing up the real subscribers.
//!
//! ## When to use a Recorder vs a real Listener
//!
//! | Feature | Recorder | Real Listener |
//! |---------|----------|---------------|
//! | **State** | Raw event log | Domain state derived from events |
//! | **Assertions** | Payload and delivery count | Derived values (counts, totals) |
//! | **Use Case** | Testing the *publisher* | Testing the listener or the full system |
//!
//! ## Example
//!
//! ```rust
//! use event_bus::{EventBus, Publisher, Recorder};
//!
//! // Component code only knows about `Publisher`.
//! fn announce(bus: &mut impl Publisher<String>) {
//!     bus.publish(&"hello".to_string());
//! }
//!
//! let mut bus: EventBus<String, Recorder<String>> = EventBus::new();
//! let id = bus.subscribe(Recorder::new());
//!
//! announce(&mut bus);
//!
//! let recorder = bus.listener(id).unwrap();
//! assert_eq!(recorder.events(), &["hello".to_string()]);
//! assert_eq!(recorder.subscription(), Some(id));
//! ```

use crate::listener::Listener;
use crate::subscription::SubscriptionId;

/// A listener that records every delivered event.
#[derive(Debug, Clone)]
pub struct Recorder<E> {
    events: Vec<E>,
    subscription: Option<SubscriptionId>,
    unsubscribed: bool,
}

impl<E> Recorder<E> {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            subscription: None,
            unsubscribed: false,
        }
    }

    /// Events received so far, in delivery order.
    pub fn events(&self) -> &[E] {
        &self.events
    }

    /// Removes and returns the recorded events.
    pub fn take_events(&mut self) -> Vec<E> {
        std::mem::take(&mut self.events)
    }

    /// The id this recorder was subscribed under, once subscribed.
    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.subscription
    }

    /// Whether the bus has called `on_unsubscribe` on this recorder.
    pub fn is_unsubscribed(&self) -> bool {
        self.unsubscribed
    }
}

impl<E> Default for Recorder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Listener<E> for Recorder<E> {
    fn on_subscribe(&mut self, id: SubscriptionId) {
        self.subscription = Some(id);
    }

    fn on_event(&mut self, event: &E) {
        self.events.push(event.clone());
    }

    fn on_unsubscribe(&mut self, _id: SubscriptionId) {
        self.unsubscribed = true;
    }
}
