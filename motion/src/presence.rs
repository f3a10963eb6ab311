//! Mount/unmount with enter and exit animations.
//!
//! A [`Presence`] keeps an element mounted while its exit transition runs and
//! reports it unmounted only after the transition reaches the hidden state.
//! Re-entering during an exit reverses from the current style.

#[cfg(test)]
#[path = "presence_test.rs"]
mod presence_test;

use crate::style::StyleState;
use crate::transition::{Phase, Transition};
use crate::variant::Variant;

#[derive(Debug, Clone)]
pub struct Presence {
    transition: Transition,
    mounted: bool,
}

impl Presence {
    /// Absent element that will animate in on [`Self::enter`].
    #[must_use]
    pub fn new(variant: impl Into<Variant>) -> Self {
        Self { transition: Transition::new(variant), mounted: false }
    }

    /// `true` while the element should be in the tree.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn style(&self) -> StyleState {
        self.transition.style()
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.transition.is_settled()
    }

    /// Mount and animate in.
    pub fn enter(&mut self, now_ms: f64) {
        self.mounted = true;
        self.transition.show(now_ms);
    }

    /// Animate out; the element stays mounted until the exit completes.
    pub fn exit(&mut self, now_ms: f64) {
        if self.mounted {
            self.transition.hide(now_ms);
        }
    }

    /// Follow a boolean `present` flag, entering or exiting on change.
    pub fn set_present(&mut self, present: bool, now_ms: f64) {
        if present {
            self.enter(now_ms);
        } else {
            self.exit(now_ms);
        }
    }

    /// Advance the clock. Returns `true` while an animation is running.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.transition.tick(now_ms);
        if self.transition.phase() == Phase::Hidden && self.transition.is_settled() {
            self.mounted = false;
        }
        !self.transition.is_settled()
    }
}
