use event_bus::SubscriptionId;
use tokio::sync::oneshot;

use crate::model::{CartItem, ProductId};
use crate::views::StorefrontView;

/// Type alias for the one-shot response channel used by the session actor.
pub type Response<T> = oneshot::Sender<T>;

/// One user intent, sent to the session actor.
///
/// Each variant maps to one [`Storefront`](crate::lifecycle::Storefront) operation and
/// carries the channel its result is sent back on. The actor handles one request at a
/// time, so every intent runs to completion before the next one starts.
#[derive(Debug)]
pub enum SessionRequest {
    QuickAddToCart {
        product_id: ProductId,
        respond_to: Response<Option<CartItem>>,
    },
    ToggleWishlist {
        product_id: ProductId,
        respond_to: Response<bool>,
    },
    OpenDetail {
        product_id: ProductId,
        respond_to: Response<bool>,
    },
    SelectSize {
        size: String,
        respond_to: Response<bool>,
    },
    IncrementQuantity {
        respond_to: Response<Option<u32>>,
    },
    DecrementQuantity {
        respond_to: Response<Option<u32>>,
    },
    ConfirmAddToCart {
        respond_to: Response<Option<CartItem>>,
    },
    CloseDetail {
        respond_to: Response<()>,
    },
    MountHeader {
        respond_to: Response<SubscriptionId>,
    },
    UnmountHeader {
        id: SubscriptionId,
        respond_to: Response<Option<u32>>,
    },
    BadgeCount {
        id: SubscriptionId,
        respond_to: Response<Option<u32>>,
    },
    View {
        respond_to: Response<StorefrontView>,
    },
}
