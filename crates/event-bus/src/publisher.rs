//! # Publisher Trait
//!
//! The seam a component uses to emit events without knowing what kind of listener sits on
//! the other side. Components take `&mut impl Publisher<E>`, so the same component code runs
//! against the production bus, a bus of test recorders, or a bare counter.

/// Something that delivers events of type `E` to zero or more listeners.
pub trait Publisher<E> {
    /// Delivers `event` and returns how many listeners received it.
    fn publish(&mut self, event: &E) -> usize;
}

/// Sink that drops every event; handy when a component is driven without any listener.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl<E> Publisher<E> for Discard {
    fn publish(&mut self, _event: &E) -> usize {
        0
    }
}
