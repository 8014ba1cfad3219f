use storefront::catalog::{BundledCatalog, CatalogSource};
use storefront::lifecycle::{Storefront, StorefrontSystem};
use storefront::model::CartItem;
use storefront::session::{SessionActor, SessionError};

async fn start() -> StorefrontSystem {
    let catalog = BundledCatalog.load().await.expect("bundled catalog loads");
    StorefrontSystem::start(Storefront::new(catalog, "Standard"), 8)
}

/// Full session driven through the client, the way a presentation layer would.
#[tokio::test]
async fn test_full_session_flow() {
    let system = start().await;
    let client = system.client.clone();

    let header = client.mount_header().await.unwrap();

    let quick = client.quick_add_to_cart("1").await.unwrap();
    assert_eq!(quick, Some(CartItem::new("1", "One Size", 1)));

    // Out of stock, ignored
    assert_eq!(client.quick_add_to_cart("4").await.unwrap(), None);

    assert!(client.open_detail("2").await.unwrap());
    assert!(client.select_size("42mm").await.unwrap());
    assert!(!client.select_size("XXL").await.unwrap());
    assert_eq!(client.increment_quantity().await.unwrap(), Some(2));
    assert_eq!(
        client.confirm_add_to_cart().await.unwrap(),
        Some(CartItem::new("2", "42mm", 2))
    );

    assert!(client.toggle_wishlist("5").await.unwrap());

    let view = client.view().await.unwrap();
    assert_eq!(view.cart_count, 3);
    assert_eq!(view.cart_entries, 2);
    assert!(view.overlay.is_none());
    assert_eq!(view.wishlist.len(), 1);
    assert_eq!(client.badge_count(header).await.unwrap(), Some(3));

    drop(client);
    let storefront = system.shutdown().await.unwrap();
    assert_eq!(storefront.cart_count(), 3);
    assert!(storefront.view().badges.is_empty());
}

#[tokio::test]
async fn test_intents_on_closed_overlay_are_ignored() {
    let system = start().await;
    let client = system.client.clone();

    assert_eq!(client.increment_quantity().await.unwrap(), None);
    assert_eq!(client.decrement_quantity().await.unwrap(), None);
    assert_eq!(client.confirm_add_to_cart().await.unwrap(), None);
    assert!(!client.open_detail("404").await.unwrap());
    client.close_detail().await.unwrap();

    drop(client);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unmount_returns_final_count() {
    let system = start().await;
    let client = system.client.clone();

    let header = client.mount_header().await.unwrap();
    client.quick_add_to_cart("6").await.unwrap();

    assert_eq!(client.unmount_header(header).await.unwrap(), Some(1));
    assert_eq!(client.badge_count(header).await.unwrap(), None);

    drop(client);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_client_fails_after_actor_stops() {
    let catalog = BundledCatalog.load().await.unwrap();
    let (actor, client) = SessionActor::new(Storefront::new(catalog, "Standard"), 4);
    drop(actor);

    let result = client.view().await;
    assert!(matches!(result, Err(SessionError::ActorClosed)));
}

#[tokio::test]
async fn test_queued_intents_run_before_teardown() {
    let catalog = BundledCatalog.load().await.unwrap();
    let (actor, client) = SessionActor::new(Storefront::new(catalog, "Standard"), 4);

    let handle = tokio::spawn(actor.run());
    let header = client.mount_header().await.unwrap();
    client.quick_add_to_cart("1").await.unwrap();
    drop(client);

    let storefront = handle.await.unwrap();
    assert_eq!(storefront.cart_count(), 1);
    assert_eq!(storefront.badge_count(header), None);
}
