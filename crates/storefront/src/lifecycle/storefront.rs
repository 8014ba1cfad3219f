use event_bus::{EventBus, SubscriptionId};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::components::{DetailOverlay, HeaderBadge, ProductGrid};
use crate::model::{CartItem, ProductId};
use crate::views::{BadgeView, CategoryCard, OverlayView, ProductCard, StorefrontView};

/// The single state container for one storefront session.
///
/// `Storefront` owns every piece of session state:
/// - **Catalog**: the read-only fixture data
/// - **Product Grid**: the authoritative cart and the wishlist
/// - **Detail Overlay**: the modal's in-progress selection
/// - **Cart Bus**: the mounted header badges, in mount order
///
/// Each method is one user intent. Intents that cannot be honored are ignored and report
/// that through their return value (`None` / `false`).
///
/// # Example
///
/// ```
/// use storefront::catalog::BundledCatalog;
/// use storefront::lifecycle::Storefront;
/// use storefront::model::ProductId;
///
/// let catalog = BundledCatalog.catalog().unwrap();
/// let mut storefront = Storefront::new(catalog, "Standard");
///
/// let header = storefront.mount_header();
/// storefront.quick_add_to_cart(&ProductId::from("1"));
///
/// assert_eq!(storefront.badge_count(header), Some(1));
/// assert_eq!(storefront.cart_count(), 1);
/// ```
#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    grid: ProductGrid,
    overlay: DetailOverlay,
    bus: EventBus<CartItem, HeaderBadge>,
}

impl Storefront {
    /// Creates a session with an empty cart, an empty wishlist, a closed overlay and no
    /// mounted headers.
    pub fn new(catalog: Catalog, placeholder_size: impl Into<String>) -> Self {
        Self {
            catalog,
            grid: ProductGrid::new(placeholder_size),
            overlay: DetailOverlay::Closed,
            bus: EventBus::new(),
        }
    }

    pub fn quick_add_to_cart(&mut self, product_id: &ProductId) -> Option<CartItem> {
        self.grid
            .quick_add_to_cart(&self.catalog, product_id, &mut self.bus)
    }

    pub fn toggle_wishlist(&mut self, product_id: &ProductId) -> bool {
        self.grid.toggle_wishlist(product_id)
    }

    /// Opens the detail overlay for `product_id`. Unknown ids leave the overlay untouched.
    pub fn open_detail(&mut self, product_id: &ProductId) -> bool {
        let Some(product) = self.catalog.find(product_id) else {
            debug!(%product_id, "Open detail ignored: unknown product");
            return false;
        };
        self.overlay.open(product, self.grid.placeholder_size());
        true
    }

    pub fn select_size(&mut self, size: &str) -> bool {
        self.overlay.select_size(size)
    }

    pub fn increment_quantity(&mut self) -> Option<u32> {
        self.overlay.increment_quantity()
    }

    pub fn decrement_quantity(&mut self) -> Option<u32> {
        self.overlay.decrement_quantity()
    }

    pub fn confirm_add_to_cart(&mut self) -> Option<CartItem> {
        self.overlay
            .confirm_add_to_cart(&mut self.grid, &mut self.bus)
    }

    pub fn close_detail(&mut self) {
        self.overlay.close();
    }

    /// Mounts a new header badge. It starts at zero and only counts later adds.
    pub fn mount_header(&mut self) -> SubscriptionId {
        self.bus.subscribe(HeaderBadge::new())
    }

    /// Unmounts a header badge and returns the count it was showing.
    pub fn unmount_header(&mut self, id: SubscriptionId) -> Option<u32> {
        self.bus.unsubscribe(id).map(|badge| badge.count())
    }

    pub fn badge_count(&self, id: SubscriptionId) -> Option<u32> {
        self.bus.listener(id).map(HeaderBadge::count)
    }

    /// Authoritative number of units in the cart.
    pub fn cart_count(&self) -> u32 {
        self.grid.cart_quantity()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn grid(&self) -> &ProductGrid {
        &self.grid
    }

    pub fn overlay(&self) -> &DetailOverlay {
        &self.overlay
    }

    pub fn view(&self) -> StorefrontView {
        StorefrontView {
            products: self
                .catalog
                .products()
                .iter()
                .map(|product| ProductCard::new(product, &self.grid))
                .collect(),
            categories: self
                .catalog
                .categories()
                .iter()
                .map(CategoryCard::from)
                .collect(),
            overlay: self.overlay.as_open().map(OverlayView::from),
            badges: self
                .bus
                .listeners()
                .map(|(id, badge)| BadgeView {
                    subscription: id.get(),
                    count: badge.count(),
                })
                .collect(),
            cart_count: self.grid.cart_quantity(),
            cart_entries: self.grid.cart_items().len(),
            wishlist: self.grid.wishlist().cloned().collect(),
        }
    }

    /// Closes the overlay and unmounts every header badge, returning them.
    ///
    /// The cart and wishlist are left as they are.
    pub fn teardown(&mut self) -> Vec<HeaderBadge> {
        self.overlay.close();
        let badges = self.bus.clear();
        info!(
            headers = badges.len(),
            cart_entries = self.grid.cart_items().len(),
            cart_count = self.grid.cart_quantity(),
            "Storefront torn down"
        );
        badges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BundledCatalog;

    fn storefront() -> Storefront {
        Storefront::new(BundledCatalog.catalog().unwrap(), "Standard")
    }

    #[test]
    fn test_open_unknown_product_keeps_overlay_closed() {
        let mut storefront = storefront();
        assert!(!storefront.open_detail(&ProductId::from("404")));
        assert!(!storefront.overlay().is_open());
    }

    #[test]
    fn test_badge_fan_out() {
        let mut storefront = storefront();
        let first = storefront.mount_header();
        let second = storefront.mount_header();

        storefront.quick_add_to_cart(&ProductId::from("1"));

        assert_eq!(storefront.badge_count(first), Some(1));
        assert_eq!(storefront.badge_count(second), Some(1));
        assert_eq!(storefront.cart_count(), 1);
    }

    #[test]
    fn test_unmounted_header_stops_counting() {
        let mut storefront = storefront();
        let header = storefront.mount_header();
        storefront.quick_add_to_cart(&ProductId::from("1"));

        assert_eq!(storefront.unmount_header(header), Some(1));
        storefront.quick_add_to_cart(&ProductId::from("1"));

        assert_eq!(storefront.badge_count(header), None);
        assert_eq!(storefront.unmount_header(header), None);
        assert_eq!(storefront.cart_count(), 2);
    }

    #[test]
    fn test_view_exposes_divergence() {
        let mut storefront = storefront();
        storefront.quick_add_to_cart(&ProductId::from("1"));
        storefront.mount_header();
        storefront.quick_add_to_cart(&ProductId::from("2"));

        let view = storefront.view();
        assert_eq!(view.cart_count, 2);
        assert_eq!(view.badges.len(), 1);
        assert_eq!(view.badges[0].count, 1);
        assert_eq!(view.products.len(), 12);
        assert_eq!(view.categories.len(), 8);
    }

    #[test]
    fn test_teardown_unmounts_everything() {
        let mut storefront = storefront();
        storefront.mount_header();
        storefront.mount_header();
        storefront.open_detail(&ProductId::from("2"));
        storefront.quick_add_to_cart(&ProductId::from("1"));

        let badges = storefront.teardown();

        assert_eq!(badges.len(), 2);
        assert!(!storefront.overlay().is_open());
        assert!(storefront.view().badges.is_empty());
        assert_eq!(storefront.cart_count(), 1);
    }
}
