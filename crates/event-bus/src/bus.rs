//! # Event Bus
//!
//! This module defines the `EventBus`, the component that owns an ordered list of
//! subscribers and delivers published events to them. It replaces ambient, process-global
//! dispatch with an explicit value that a single state container owns.
//!
//! **Concurrency Model**:
//! Every operation takes `&mut self`. The borrow checker therefore guarantees that a
//! `publish` runs to completion before anyone can subscribe, unsubscribe or publish again,
//! so there is no need for a `Mutex` around the subscriber list and no re-entrant delivery.

use crate::listener::Listener;
use crate::publisher::Publisher;
use crate::subscription::SubscriptionId;
use std::fmt::Debug;
use std::marker::PhantomData;
use tracing::{debug, info};

/// An ordered publish/subscribe channel for events of type `E`.
///
/// `L` is the listener type stored by the bus. Use a concrete type when every subscriber
/// is the same kind of component, or `Box<dyn Listener<E> + Send>` to mix kinds.
///
/// # Delivery Semantics
///
/// * **Ordered** – listeners receive an event in the order they subscribed.
/// * **At most once** – each current listener gets exactly one delivery per publish.
/// * **No replay** – a listener never sees events published before it subscribed.
/// * **No queueing** – publishing with zero subscribers drops the event.
///
/// ```rust
/// use event_bus::{EventBus, Recorder};
///
/// let mut bus: EventBus<u32, Recorder<u32>> = EventBus::new();
/// assert_eq!(bus.publish(&1), 0);
///
/// let id = bus.subscribe(Recorder::new());
/// assert_eq!(bus.publish(&2), 1);
///
/// let recorder = bus.unsubscribe(id).unwrap();
/// assert_eq!(recorder.events(), &[2]);
/// ```
pub struct EventBus<E, L> {
    subscribers: Vec<(SubscriptionId, L)>,
    next_id: u32,
    _event: PhantomData<fn(&E)>,
}

impl<E, L: Listener<E>> EventBus<E, L> {
    /// Creates an empty bus. The first subscription gets id `1`.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 1,
            _event: PhantomData,
        }
    }

    /// Appends `listener` to the end of the delivery order and returns its id.
    pub fn subscribe(&mut self, mut listener: L) -> SubscriptionId {
        let id = SubscriptionId::from(self.next_id);
        self.next_id += 1;

        listener.on_subscribe(id);
        self.subscribers.push((id, listener));
        info!(event_type = event_type::<E>(), %id, size = self.subscribers.len(), "Subscribed");
        id
    }

    /// Removes the listener registered under `id` and returns it with its final state.
    ///
    /// The remaining listeners keep their relative order. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Option<L> {
        let Some(position) = self.subscribers.iter().position(|(sub, _)| *sub == id) else {
            debug!(event_type = event_type::<E>(), %id, "Unsubscribe for unknown id");
            return None;
        };

        let (_, mut listener) = self.subscribers.remove(position);
        listener.on_unsubscribe(id);
        info!(event_type = event_type::<E>(), %id, size = self.subscribers.len(), "Unsubscribed");
        Some(listener)
    }

    /// Delivers `event` to every current listener, in subscription order.
    ///
    /// Returns the number of listeners that received it. With no listeners the event is
    /// dropped and `0` is returned.
    pub fn publish(&mut self, event: &E) -> usize
    where
        E: Debug,
    {
        let event_type = event_type::<E>();
        if self.subscribers.is_empty() {
            debug!(event_type, ?event, "No subscribers, event dropped");
            return 0;
        }

        debug!(event_type, ?event, "Publish");
        for (_, listener) in &mut self.subscribers {
            listener.on_event(event);
        }
        info!(event_type, delivered = self.subscribers.len(), "Delivered");
        self.subscribers.len()
    }

    /// Unsubscribes every listener, in order, and returns them.
    ///
    /// The id counter is not reset, so ids stay unique for the lifetime of the bus.
    pub fn clear(&mut self) -> Vec<L> {
        let drained: Vec<L> = self
            .subscribers
            .drain(..)
            .map(|(id, mut listener)| {
                listener.on_unsubscribe(id);
                listener
            })
            .collect();
        info!(
            event_type = event_type::<E>(),
            cleared = drained.len(),
            "Cleared"
        );
        drained
    }

    pub fn listener(&self, id: SubscriptionId) -> Option<&L> {
        self.subscribers
            .iter()
            .find(|(sub, _)| *sub == id)
            .map(|(_, listener)| listener)
    }

    pub fn listener_mut(&mut self, id: SubscriptionId) -> Option<&mut L> {
        self.subscribers
            .iter_mut()
            .find(|(sub, _)| *sub == id)
            .map(|(_, listener)| listener)
    }

    /// Iterates over the current listeners in delivery order.
    pub fn listeners(&self) -> impl Iterator<Item = (SubscriptionId, &L)> {
        self.subscribers
            .iter()
            .map(|(id, listener)| (*id, listener))
    }

    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.subscribers.iter().any(|(sub, _)| *sub == id)
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<E, L: Listener<E>> Default for EventBus<E, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, L: Debug> Debug for EventBus<E, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers)
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl<E: Debug, L: Listener<E>> Publisher<E> for EventBus<E, L> {
    fn publish(&mut self, event: &E) -> usize {
        EventBus::publish(self, event)
    }
}

// Extract just the type name (e.g., "CartItem" instead of "storefront::model::cart::CartItem")
fn event_type<E>() -> &'static str {
    std::any::type_name::<E>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}
