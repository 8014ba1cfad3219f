use tokio::task::JoinHandle;
use tracing::{error, info};

use super::Storefront;
use crate::session::{SessionActor, SessionClient, SessionError};

/// The runtime orchestrator for one storefront session.
///
/// `StorefrontSystem` is responsible for:
/// - **Startup**: Moving a [`Storefront`] into a `SessionActor` and spawning it
/// - **Access**: Handing out the [`SessionClient`] used to send intents
/// - **Shutdown**: Closing the channel and waiting for the session to tear down
///
/// # Example
///
/// ```ignore
/// let storefront = Storefront::new(catalog, "Standard");
/// let system = StorefrontSystem::start(storefront, 32);
///
/// let header = system.client.mount_header().await?;
/// system.client.quick_add_to_cart("1").await?;
///
/// let storefront = system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    /// Client for sending intents to the session actor
    pub client: SessionClient,

    handle: JoinHandle<Storefront>,
}

impl StorefrontSystem {
    /// Spawns the session actor for `storefront`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(storefront: Storefront, mailbox_capacity: usize) -> Self {
        let (actor, client) = SessionActor::new(storefront, mailbox_capacity);
        let handle = tokio::spawn(actor.run());
        info!(mailbox_capacity, "Storefront system started");

        Self { client, handle }
    }

    /// Gracefully shuts the session down and returns the torn-down storefront.
    ///
    /// Dropping the client closes the channel once every clone of it is gone; the actor
    /// then finishes the requests already queued, tears down, and exits.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::TaskFailed` if the session task panicked.
    pub async fn shutdown(self) -> Result<Storefront, SessionError> {
        info!("Shutting down storefront...");
        drop(self.client);

        let storefront = self.handle.await.map_err(|e| {
            error!("Session task failed: {:?}", e);
            SessionError::from(e)
        })?;

        info!(
            cart_count = storefront.cart_count(),
            "Storefront shutdown complete."
        );
        Ok(storefront)
    }
}
