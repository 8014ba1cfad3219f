//! # Storefront Demo
//!
//! Drives one session the way a shopper would:
//! 1.  Loads configuration and the catalog it selects.
//! 2.  Starts the [`StorefrontSystem`] and mounts a header.
//! 3.  Quick-adds a product, then adds another through the detail overlay.
//! 4.  Prints the resulting view as JSON and shuts down.

use event_bus::tracing::setup_tracing;
use storefront::config::StorefrontConfig;
use storefront::lifecycle::{Storefront, StorefrontSystem};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = StorefrontConfig::from_env()?;
    info!(?config, "Starting storefront");

    let catalog = config.catalog_source().load().await?;
    let storefront = Storefront::new(catalog, config.placeholder_size.clone());
    let system = StorefrontSystem::start(storefront, config.mailbox_capacity);
    let client = system.client.clone();

    let header = client.mount_header().await?;

    let span = tracing::info_span!("quick_add");
    async {
        if let Some(item) = client.quick_add_to_cart("1").await? {
            info!(product_id = %item.product_id, size = %item.size, "Quick-added");
        }
        // Out of stock: ignored
        client.quick_add_to_cart("4").await?;
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("detail_overlay");
    async {
        client.open_detail("2").await?;
        client.select_size("42mm").await?;
        client.increment_quantity().await?;
        if let Some(item) = client.confirm_add_to_cart().await? {
            info!(product_id = %item.product_id, quantity = item.quantity, "Added from overlay");
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    client.toggle_wishlist("5").await?;

    let view = client.view().await?;
    println!("{}", serde_json::to_string_pretty(&view)?);

    let badge = client.badge_count(header).await?.unwrap_or_default();
    info!(cart_count = view.cart_count, badge, "Session state");

    drop(client);
    system.shutdown().await?;

    info!("Storefront demo completed");
    Ok(())
}
