//! Per-element transition state machine.
//!
//! Each animated element owns one [`Transition`]. It sits in
//! [`Phase::Hidden`] until [`Transition::show`], moves through
//! [`Phase::Animating`] as [`Transition::tick`] advances the clock, and
//! settles in [`Phase::Visible`]. [`Transition::hide`] runs the same machine
//! in reverse for exit animations. A reversal mid-flight starts from the
//! current interpolated style, so there is never a visual jump.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use crate::style::StyleState;
use crate::variant::{Timing, Variant};

/// Coarse lifecycle of an animated element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Animating,
    Visible,
}

/// Which end state a running animation is heading toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy)]
struct Active {
    from: StyleState,
    target: Target,
    started_ms: f64,
    timing: Timing,
}

/// Animated element driven by an external clock.
#[derive(Debug, Clone)]
pub struct Transition {
    variant: Variant,
    phase: Phase,
    current: StyleState,
    active: Option<Active>,
}

impl Transition {
    /// Element that starts hidden.
    #[must_use]
    pub fn new(variant: impl Into<Variant>) -> Self {
        let variant = variant.into();
        Self { current: variant.hidden, variant, phase: Phase::Hidden, active: None }
    }

    /// Element that is already visible, with no entrance.
    #[must_use]
    pub fn settled_visible(variant: impl Into<Variant>) -> Self {
        let variant = variant.into();
        Self { current: variant.visible, variant, phase: Phase::Visible, active: None }
    }

    #[must_use]
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Style as of the last [`Self::tick`].
    #[must_use]
    pub fn style(&self) -> StyleState {
        self.current
    }

    /// `true` when no animation is pending or running.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.active.is_none()
    }

    /// `true` when the element is visible or on its way there.
    #[must_use]
    pub fn is_entering_or_visible(&self) -> bool {
        match self.active {
            Some(active) => active.target == Target::Visible,
            None => self.phase == Phase::Visible,
        }
    }

    /// Clock time at which visible motion begins (after any delay), if an
    /// animation has been started.
    #[must_use]
    pub fn motion_start_ms(&self) -> Option<f64> {
        self.active.map(|a| a.started_ms + a.timing.delay_ms)
    }

    /// Begin the entrance using the variant's own timing.
    ///
    /// Returns `false` if the element is already visible or entering.
    pub fn show(&mut self, now_ms: f64) -> bool {
        self.show_after(now_ms, 0.0)
    }

    /// Begin the entrance with `extra_delay_ms` added to the variant delay.
    pub fn show_after(&mut self, now_ms: f64, extra_delay_ms: f64) -> bool {
        if self.is_entering_or_visible() {
            return false;
        }
        let mut timing = self.variant.timing;
        timing.delay_ms += extra_delay_ms.max(0.0);
        self.start(now_ms, Target::Visible, timing);
        true
    }

    /// Begin the exit back to the hidden state. Exits never wait on the
    /// entrance delay.
    ///
    /// Returns `false` if the element is already hidden or leaving.
    pub fn hide(&mut self, now_ms: f64) -> bool {
        let leaving_or_hidden = match self.active {
            Some(active) => active.target == Target::Hidden,
            None => self.phase == Phase::Hidden,
        };
        if leaving_or_hidden {
            return false;
        }
        let timing = Timing { delay_ms: 0.0, ..self.variant.timing };
        self.start(now_ms, Target::Hidden, timing);
        true
    }

    /// Jump straight to the visible state, cancelling any animation.
    pub fn finish_visible(&mut self) {
        self.active = None;
        self.current = self.variant.visible;
        self.phase = Phase::Visible;
    }

    /// Advance the clock and return the current style.
    pub fn tick(&mut self, now_ms: f64) -> StyleState {
        let Some(active) = self.active else {
            return self.current;
        };
        let to = match active.target {
            Target::Visible => self.variant.visible,
            Target::Hidden => self.variant.hidden,
        };

        let elapsed = now_ms - active.started_ms - active.timing.delay_ms;
        if elapsed < 0.0 {
            self.current = active.from;
            return self.current;
        }

        let progress = if active.timing.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed / active.timing.duration_ms).min(1.0)
        };

        if progress >= 1.0 {
            self.current = to;
            self.active = None;
            self.phase = match active.target {
                Target::Visible => Phase::Visible,
                Target::Hidden => Phase::Hidden,
            };
        } else {
            self.current = active.from.lerp(&to, active.timing.easing.apply(progress));
        }
        self.current
    }

    fn start(&mut self, now_ms: f64, target: Target, timing: Timing) {
        self.active = Some(Active { from: self.current, target, started_ms: now_ms, timing });
        self.phase = Phase::Animating;
    }
}
