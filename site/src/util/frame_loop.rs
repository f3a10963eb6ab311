//! Cancellable frame clock for component-owned animations.
//!
//! DESIGN
//! ======
//! Each animated component owns a [`Lifeline`]. Its frame task polls the
//! lifeline before every tick and exits once the component's cleanup ends
//! it, so no callback ever touches a disposed signal.

#[cfg(test)]
#[path = "frame_loop_test.rs"]
mod frame_loop_test;

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared liveness flag for tasks spawned on behalf of a component.
#[derive(Clone, Debug)]
pub struct Lifeline(Arc<AtomicBool>);

impl Default for Lifeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifeline {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Mark the owner as gone. Every clone observes it.
    pub fn end(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Milliseconds on the page clock. Zero off-browser.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Drive `on_frame` roughly every [`motion::consts::FRAME_INTERVAL_MS`]
/// until it breaks or `lifeline` ends.
///
/// The first call happens synchronously inside the spawned task, so an
/// animation paints its starting frame without waiting a full interval.
pub fn run_frames<F>(lifeline: Lifeline, on_frame: F)
where
    F: FnMut(f64) -> ControlFlow<()> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let mut on_frame = on_frame;
        leptos::task::spawn_local(async move {
            let interval = std::time::Duration::from_millis(motion::consts::FRAME_INTERVAL_MS);
            while lifeline.is_alive() {
                if on_frame(now_ms()).is_break() {
                    break;
                }
                gloo_timers::future::sleep(interval).await;
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (lifeline, on_frame);
    }
}
