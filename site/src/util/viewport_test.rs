use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn counting(hits: &Arc<AtomicUsize>) -> impl FnMut(&ViewportSnapshot) -> ControlFlow<()> + Send + Sync + 'static {
    let hits = hits.clone();
    move |_| {
        hits.fetch_add(1, Ordering::Relaxed);
        ControlFlow::Continue(())
    }
}

#[test]
fn publish_reaches_subscribers() {
    let owner = Owner::new();
    owner.with(|| {
        let bus = ViewportBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        assert!(bus.subscribe(counting(&hits)).is_some());
        bus.publish(ViewportSnapshot::new(10.0, 800.0, 600.0));
        bus.publish(ViewportSnapshot::new(20.0, 800.0, 600.0));
        assert_eq!(hits.load(Ordering::Relaxed), 2);
        assert_eq!(bus.latest(), Some(ViewportSnapshot::new(20.0, 800.0, 600.0)));
    });
}

#[test]
fn late_subscriber_gets_replay() {
    let owner = Owner::new();
    owner.with(|| {
        let bus = ViewportBus::new();
        bus.publish(ViewportSnapshot::new(120.0, 1024.0, 768.0));
        let hits = Arc::new(AtomicUsize::new(0));
        bus.subscribe(counting(&hits));
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    });
}

#[test]
fn unsubscribed_callback_stops_receiving() {
    let owner = Owner::new();
    owner.with(|| {
        let bus = ViewportBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let id = bus.subscribe(counting(&hits)).unwrap();
        bus.unsubscribe(id);
        bus.publish(ViewportSnapshot::new(0.0, 800.0, 600.0));
        assert_eq!(hits.load(Ordering::Relaxed), 0);
    });
}

#[test]
fn copies_share_one_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let bus = ViewportBus::new();
        let other = bus;
        let hits = Arc::new(AtomicUsize::new(0));
        other.subscribe(counting(&hits));
        bus.publish(ViewportSnapshot::new(0.0, 800.0, 600.0));
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    });
}

#[test]
fn read_viewport_is_none_off_browser() {
    assert!(read_viewport().is_none());
}
