//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Subscriptions**: Subscribe, unsubscribe and teardown, with the subscription id and
//!   the number of remaining listeners
//! - **Deliveries**: Every publish, with the event type and how many listeners received it
//! - **Dropped events**: Publishes that found no listener (debug level, with the payload)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads
//! RUST_LOG=debug cargo run
//!
//! # Filter to the bus only
//! RUST_LOG=event_bus=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`** a quick-add looks like:
//!
//! ```text
//! INFO Subscribed event_type="CartItem" id=sub_1 size=1
//! INFO Added to cart product_id=1 size=One Size quantity=1 entries=1
//! INFO Delivered event_type="CartItem" delivered=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Event type is carried as a field instead
        .compact()
        .init();
}
