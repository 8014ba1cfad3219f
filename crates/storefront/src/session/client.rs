use event_bus::SubscriptionId;
use tokio::sync::{mpsc, oneshot};

use super::error::SessionError;
use super::message::{Response, SessionRequest};
use crate::model::{CartItem, ProductId};
use crate::views::StorefrontView;

/// A cloneable async handle for sending user intents to a `SessionActor`.
///
/// Every method sends one [`SessionRequest`] and waits for the actor's reply. The reply is
/// the return value of the matching [`Storefront`](crate::lifecycle::Storefront) operation;
/// the `Err` side only reports that the actor is gone.
#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionClient {
    pub fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> SessionRequest,
    ) -> Result<T, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| SessionError::ActorClosed)?;
        response.await.map_err(|_| SessionError::ActorDropped)
    }

    pub async fn quick_add_to_cart(
        &self,
        product_id: impl Into<ProductId>,
    ) -> Result<Option<CartItem>, SessionError> {
        let product_id = product_id.into();
        self.request(|respond_to| SessionRequest::QuickAddToCart {
            product_id,
            respond_to,
        })
        .await
    }

    pub async fn toggle_wishlist(
        &self,
        product_id: impl Into<ProductId>,
    ) -> Result<bool, SessionError> {
        let product_id = product_id.into();
        self.request(|respond_to| SessionRequest::ToggleWishlist {
            product_id,
            respond_to,
        })
        .await
    }

    pub async fn open_detail(
        &self,
        product_id: impl Into<ProductId>,
    ) -> Result<bool, SessionError> {
        let product_id = product_id.into();
        self.request(|respond_to| SessionRequest::OpenDetail {
            product_id,
            respond_to,
        })
        .await
    }

    pub async fn select_size(&self, size: impl Into<String>) -> Result<bool, SessionError> {
        let size = size.into();
        self.request(|respond_to| SessionRequest::SelectSize { size, respond_to })
            .await
    }

    pub async fn increment_quantity(&self) -> Result<Option<u32>, SessionError> {
        self.request(|respond_to| SessionRequest::IncrementQuantity { respond_to })
            .await
    }

    pub async fn decrement_quantity(&self) -> Result<Option<u32>, SessionError> {
        self.request(|respond_to| SessionRequest::DecrementQuantity { respond_to })
            .await
    }

    pub async fn confirm_add_to_cart(&self) -> Result<Option<CartItem>, SessionError> {
        self.request(|respond_to| SessionRequest::ConfirmAddToCart { respond_to })
            .await
    }

    pub async fn close_detail(&self) -> Result<(), SessionError> {
        self.request(|respond_to| SessionRequest::CloseDetail { respond_to })
            .await
    }

    pub async fn mount_header(&self) -> Result<SubscriptionId, SessionError> {
        self.request(|respond_to| SessionRequest::MountHeader { respond_to })
            .await
    }

    pub async fn unmount_header(&self, id: SubscriptionId) -> Result<Option<u32>, SessionError> {
        self.request(|respond_to| SessionRequest::UnmountHeader { id, respond_to })
            .await
    }

    pub async fn badge_count(&self, id: SubscriptionId) -> Result<Option<u32>, SessionError> {
        self.request(|respond_to| SessionRequest::BadgeCount { id, respond_to })
            .await
    }

    pub async fn view(&self) -> Result<StorefrontView, SessionError> {
        self.request(|respond_to| SessionRequest::View { respond_to })
            .await
    }
}
