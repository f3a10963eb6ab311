//! Page-wide viewport bus.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` installs one scroll listener and one resize listener on `window`
//! and publishes a [`ViewportSnapshot`] for each event. Components that care
//! about scroll position or element visibility subscribe here instead of
//! attaching their own window listeners.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::ops::ControlFlow;

use leptos::prelude::*;
use motion::viewport::{SubscriptionId, ViewportSignal, ViewportSnapshot};

/// Context handle around the shared [`ViewportSignal`].
#[derive(Clone, Copy)]
pub struct ViewportBus(StoredValue<ViewportSignal>);

impl Default for ViewportBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportBus {
    pub fn new() -> Self {
        Self(StoredValue::new(ViewportSignal::new()))
    }

    /// Register `callback`. It is replayed immediately with the latest
    /// snapshot, if any. `None` means the bus was already disposed.
    pub fn subscribe<F>(&self, callback: F) -> Option<SubscriptionId>
    where
        F: FnMut(&ViewportSnapshot) -> ControlFlow<()> + Send + Sync + 'static,
    {
        self.0.try_update_value(|signal| signal.subscribe(callback))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.0.try_update_value(|signal| signal.unsubscribe(id));
    }

    pub fn publish(&self, snapshot: ViewportSnapshot) {
        self.0.try_update_value(|signal| signal.publish(snapshot));
    }

    pub fn latest(&self) -> Option<ViewportSnapshot> {
        self.0.try_with_value(ViewportSignal::latest).flatten()
    }
}

/// Current window geometry. `None` off-browser or if the window is gone.
pub fn read_viewport() -> Option<ViewportSnapshot> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let scroll_y = window.scroll_y().unwrap_or_default();
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(ViewportSnapshot::new(scroll_y, width, height))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
