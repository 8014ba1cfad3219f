//! # Session Runtime
//!
//! A storefront session runs as an actor: a tokio task that owns the
//! [`Storefront`](crate::lifecycle::Storefront) and a cloneable client that sends it user
//! intents.
//!
//! - [`SessionActor`] - the server half; owns the state and the receiver
//! - [`SessionClient`] - the async API; one method per intent
//! - [`SessionRequest`] - the message type between them
//! - [`SessionError`] - failures of the channel, never of an intent
//!
//! Dropping every client closes the channel. The actor then tears the storefront down
//! (overlay closed, headers unmounted) and its task finishes.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;

pub use actor::*;
pub use client::*;
pub use error::*;
pub use message::*;
