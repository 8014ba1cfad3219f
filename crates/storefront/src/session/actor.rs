use tokio::sync::mpsc;
use tracing::{debug, info};

use super::client::SessionClient;
use super::message::SessionRequest;
use crate::lifecycle::Storefront;

/// The task that plays the single UI thread of a storefront session.
///
/// **Concurrency Model**:
/// The actor exclusively owns its [`Storefront`] and processes one [`SessionRequest`] at a
/// time. Every intent (and the cart broadcast it may trigger) runs to completion before the
/// next message is read, so the storefront needs no `Mutex`, and header badges can never be
/// mounted or unmounted in the middle of a delivery.
pub struct SessionActor {
    receiver: mpsc::Receiver<SessionRequest>,
    storefront: Storefront,
}

impl SessionActor {
    /// Creates a new `SessionActor` and its associated `SessionClient`.
    ///
    /// # Arguments
    ///
    /// * `storefront` - The session state, moved into the actor
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(storefront: Storefront, buffer_size: usize) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            storefront,
        };
        (actor, SessionClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped, then tears the
    /// storefront down and returns it.
    pub async fn run(mut self) -> Storefront {
        info!(
            products = self.storefront.catalog().len(),
            "Session started"
        );

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        self.storefront.teardown();
        info!(
            cart_entries = self.storefront.grid().cart_items().len(),
            "Session shutting down"
        );
        self.storefront
    }

    fn handle(&mut self, msg: SessionRequest) {
        let storefront = &mut self.storefront;
        match msg {
            SessionRequest::QuickAddToCart {
                product_id,
                respond_to,
            } => {
                debug!(%product_id, "QuickAddToCart");
                let _ = respond_to.send(storefront.quick_add_to_cart(&product_id));
            }
            SessionRequest::ToggleWishlist {
                product_id,
                respond_to,
            } => {
                debug!(%product_id, "ToggleWishlist");
                let _ = respond_to.send(storefront.toggle_wishlist(&product_id));
            }
            SessionRequest::OpenDetail {
                product_id,
                respond_to,
            } => {
                debug!(%product_id, "OpenDetail");
                let _ = respond_to.send(storefront.open_detail(&product_id));
            }
            SessionRequest::SelectSize { size, respond_to } => {
                debug!(size = %size, "SelectSize");
                let _ = respond_to.send(storefront.select_size(&size));
            }
            SessionRequest::IncrementQuantity { respond_to } => {
                let _ = respond_to.send(storefront.increment_quantity());
            }
            SessionRequest::DecrementQuantity { respond_to } => {
                let _ = respond_to.send(storefront.decrement_quantity());
            }
            SessionRequest::ConfirmAddToCart { respond_to } => {
                debug!("ConfirmAddToCart");
                let _ = respond_to.send(storefront.confirm_add_to_cart());
            }
            SessionRequest::CloseDetail { respond_to } => {
                storefront.close_detail();
                let _ = respond_to.send(());
            }
            SessionRequest::MountHeader { respond_to } => {
                let _ = respond_to.send(storefront.mount_header());
            }
            SessionRequest::UnmountHeader { id, respond_to } => {
                let _ = respond_to.send(storefront.unmount_header(id));
            }
            SessionRequest::BadgeCount { id, respond_to } => {
                let _ = respond_to.send(storefront.badge_count(id));
            }
            SessionRequest::View { respond_to } => {
                let _ = respond_to.send(storefront.view());
            }
        }
    }
}
