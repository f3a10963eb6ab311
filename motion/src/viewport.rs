//! Viewport geometry and the subscription hub that distributes it.
//!
//! DESIGN
//! ======
//! Scroll position and viewport size are ambient state read by several
//! independent components. Rather than each component attaching its own
//! window listener, one publisher feeds a [`ViewportSignal`] and components
//! subscribe to it. Subscriptions end deterministically: either the owner
//! calls [`ViewportSignal::unsubscribe`] on teardown, or the callback returns
//! [`ControlFlow::Break`] (one-shot observers). A removed callback is never
//! invoked again.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::ops::ControlFlow;

/// Window scroll offset and inner size, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSnapshot {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewportSnapshot {
    #[must_use]
    pub fn new(scroll_y: f64, width: f64, height: f64) -> Self {
        Self { scroll_y, width, height }
    }
}

/// Opaque handle returned by [`ViewportSignal::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Callback invoked with each published snapshot.
pub type ViewportCallback = Box<dyn FnMut(&ViewportSnapshot) -> ControlFlow<()> + Send + Sync>;

/// Publish/subscribe hub for viewport snapshots.
#[derive(Default)]
pub struct ViewportSignal {
    next_id: u64,
    latest: Option<ViewportSnapshot>,
    subscribers: Vec<(SubscriptionId, ViewportCallback)>,
}

impl std::fmt::Debug for ViewportSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportSignal")
            .field("next_id", &self.next_id)
            .field("latest", &self.latest)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl ViewportSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently published snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<ViewportSnapshot> {
        self.latest
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    #[must_use]
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscribers.iter().any(|(sid, _)| *sid == id)
    }

    /// Register `callback`. If a snapshot has already been published it is
    /// replayed immediately; a callback that breaks on replay is never
    /// stored, but its id is still returned.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&ViewportSnapshot) -> ControlFlow<()> + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let mut callback: ViewportCallback = Box::new(callback);
        if let Some(snapshot) = self.latest
            && callback(&snapshot).is_break()
        {
            return id;
        }
        self.subscribers.push((id, callback));
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Deliver `snapshot` to every subscriber in subscription order,
    /// dropping those that return [`ControlFlow::Break`].
    pub fn publish(&mut self, snapshot: ViewportSnapshot) {
        self.latest = Some(snapshot);
        self.subscribers
            .retain_mut(|(_, callback)| callback(&snapshot).is_continue());
    }
}
