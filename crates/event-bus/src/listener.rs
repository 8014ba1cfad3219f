//! # Listener Trait
//!
//! The `Listener` trait defines the contract that every subscriber (a header badge, a
//! test recorder, …) must implement to be registered on an [`EventBus`](crate::EventBus).
//! It provides lifecycle hooks (`on_subscribe`, `on_event`, `on_unsubscribe`) that the bus
//! calls as the subscription is created, fed and torn down.
//!
//! # Provided Methods (Hooks)
//! Only [`Listener::on_event`] is required. The subscription hooks default to doing nothing:
//! - [`Listener::on_subscribe`]
//! - [`Listener::on_unsubscribe`]
//!
//! # Ownership
//! The bus owns its listeners. A listener's state is read back through
//! [`EventBus::listener`](crate::EventBus::listener) while it is subscribed, and handed back
//! to the caller by [`EventBus::unsubscribe`](crate::EventBus::unsubscribe) when it leaves.

use crate::subscription::SubscriptionId;

/// Trait that any subscriber must implement to receive events of type `E`.
pub trait Listener<E> {
    /// Called once, right after the listener has been added to the delivery order.
    fn on_subscribe(&mut self, _id: SubscriptionId) {}

    /// Called for every event published while the listener is subscribed.
    ///
    /// Delivery is synchronous: the publisher does not return until every current
    /// listener has run this hook.
    fn on_event(&mut self, event: &E);

    /// Called once, right after the listener has been removed from the delivery order.
    fn on_unsubscribe(&mut self, _id: SubscriptionId) {}
}

impl<E, L: Listener<E> + ?Sized> Listener<E> for Box<L> {
    fn on_subscribe(&mut self, id: SubscriptionId) {
        (**self).on_subscribe(id);
    }

    fn on_event(&mut self, event: &E) {
        (**self).on_event(event);
    }

    fn on_unsubscribe(&mut self, id: SubscriptionId) {
        (**self).on_unsubscribe(id);
    }
}
