//! # Subscription Identifiers
//!
//! Every listener registered on an [`EventBus`](crate::EventBus) is addressed by a
//! [`SubscriptionId`]. Ids are handed out by the bus itself from a per-bus counter,
//! so they are unique for the lifetime of that bus and never reused.

use std::fmt::Display;

/// Type-safe identifier for a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u32);

impl SubscriptionId {
    /// Returns the raw counter value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for SubscriptionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sub_{}", self.0)
    }
}
