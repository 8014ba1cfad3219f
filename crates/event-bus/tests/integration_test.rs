use event_bus::{Discard, EventBus, Listener, Publisher, Recorder, SubscriptionId};

// --- Test Listener ---

#[derive(Debug, Clone, PartialEq)]
struct Ping {
    seq: u32,
}

/// Records each event it sees, tagged with its own name.
struct Tagged {
    tag: &'static str,
    seen: Vec<(&'static str, u32)>,
}

impl Tagged {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            seen: Vec::new(),
        }
    }
}

impl Listener<Ping> for Tagged {
    fn on_event(&mut self, event: &Ping) {
        self.seen.push((self.tag, event.seq));
    }
}

fn emit_twice(publisher: &mut impl Publisher<Ping>) -> usize {
    publisher.publish(&Ping { seq: 1 }) + publisher.publish(&Ping { seq: 2 })
}

#[test]
fn test_delivery_follows_subscription_order() {
    let mut bus: EventBus<Ping, Tagged> = EventBus::new();
    let first = bus.subscribe(Tagged::new("first"));
    let second = bus.subscribe(Tagged::new("second"));

    let delivered = emit_twice(&mut bus);
    assert_eq!(delivered, 4);

    let order: Vec<&str> = bus.listeners().map(|(_, l)| l.tag).collect();
    assert_eq!(order, vec!["first", "second"]);
    assert_eq!(
        bus.listener(first).unwrap().seen,
        vec![("first", 1), ("first", 2)]
    );
    assert_eq!(
        bus.listener(second).unwrap().seen,
        vec![("second", 1), ("second", 2)]
    );
}

#[test]
fn test_late_subscriber_misses_earlier_events() {
    let mut bus: EventBus<Ping, Recorder<Ping>> = EventBus::new();
    let early = bus.subscribe(Recorder::new());
    bus.publish(&Ping { seq: 1 });

    let late = bus.subscribe(Recorder::new());
    bus.publish(&Ping { seq: 2 });

    assert_eq!(bus.listener(early).unwrap().events().len(), 2);
    assert_eq!(bus.listener(late).unwrap().events(), &[Ping { seq: 2 }]);
}

#[test]
fn test_unsubscribed_listener_receives_nothing_more() {
    let mut bus: EventBus<Ping, Recorder<Ping>> = EventBus::new();
    let id = bus.subscribe(Recorder::new());
    bus.publish(&Ping { seq: 1 });

    let recorder = bus.unsubscribe(id).expect("recorder should be subscribed");
    assert!(recorder.is_unsubscribed());
    assert_eq!(recorder.subscription(), Some(id));

    assert_eq!(bus.publish(&Ping { seq: 2 }), 0);
    assert_eq!(recorder.events(), &[Ping { seq: 1 }]);
}

#[test]
fn test_clear_tears_down_every_listener() {
    let mut bus: EventBus<Ping, Recorder<Ping>> = EventBus::new();
    bus.subscribe(Recorder::new());
    bus.subscribe(Recorder::new());

    let cleared = bus.clear();
    assert_eq!(cleared.len(), 2);
    assert!(cleared.iter().all(Recorder::is_unsubscribed));
    assert!(bus.is_empty());

    let next = bus.subscribe(Recorder::new());
    assert_eq!(next, SubscriptionId::from(3));
}

#[test]
fn test_discard_publisher_accepts_and_drops() {
    let mut sink = Discard;
    assert_eq!(emit_twice(&mut sink), 0);
}
