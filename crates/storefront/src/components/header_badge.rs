//! The cart count badge in the page header.
//!
//! The header holds no reference to the cart. It keeps its own running list of the items it
//! has been told about and displays the sum of their quantities. This makes the badge an
//! independent replica of the cart that is never reconciled with it:
//!
//! - a badge mounted after some adds only counts the adds that came after it
//! - two mounted badges each receive every add and count it separately

use event_bus::{Listener, SubscriptionId};
use tracing::debug;

use crate::model::CartItem;

#[derive(Debug, Clone, Default)]
pub struct HeaderBadge {
    received: Vec<CartItem>,
    subscription: Option<SubscriptionId>,
}

impl HeaderBadge {
    /// A freshly mounted badge showing zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items received since mounting, in delivery order.
    pub fn received(&self) -> &[CartItem] {
        &self.received
    }

    /// The displayed count: total quantity across received items.
    pub fn count(&self) -> u32 {
        self.received
            .iter()
            .fold(0u32, |total, item| total.saturating_add(item.quantity))
    }

    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.subscription
    }
}

impl Listener<CartItem> for HeaderBadge {
    fn on_subscribe(&mut self, id: SubscriptionId) {
        self.subscription = Some(id);
    }

    fn on_event(&mut self, item: &CartItem) {
        self.received.push(item.clone());
        if let Some(id) = self.subscription {
            debug!(%id, count = self.count(), "Badge updated");
        }
    }
}
