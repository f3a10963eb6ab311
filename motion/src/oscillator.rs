//! Infinite keyframe loop (`0 → peak → 0`) for the hero scroll indicator.
//!
//! Unlike [`crate::transition::Transition`] this never settles on its own.
//! The owner must call [`Oscillator::stop`] on teardown; after that every
//! [`Oscillator::tick`] returns `None` so no further frames are painted.

#[cfg(test)]
#[path = "oscillator_test.rs"]
mod oscillator_test;

use crate::consts::{SCROLL_INDICATOR_AMPLITUDE_PX, SCROLL_INDICATOR_PERIOD_MS};
use crate::easing::Easing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    period_ms: f64,
    amplitude: f64,
    easing: Easing,
    started_ms: f64,
    state: State,
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new(SCROLL_INDICATOR_PERIOD_MS, SCROLL_INDICATOR_AMPLITUDE_PX)
    }
}

impl Oscillator {
    #[must_use]
    pub fn new(period_ms: f64, amplitude: f64) -> Self {
        Self { period_ms: period_ms.max(1.0), amplitude, easing: Easing::EaseInOut, started_ms: 0.0, state: State::Idle }
    }

    #[must_use]
    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.state == State::Stopped
    }

    /// Start looping from `now_ms`. A stopped oscillator stays stopped.
    pub fn start(&mut self, now_ms: f64) {
        if self.state == State::Idle {
            self.started_ms = now_ms;
            self.state = State::Running;
        }
    }

    /// Stop permanently.
    pub fn stop(&mut self) {
        self.state = State::Stopped;
    }

    /// Offset for `now_ms`, or `None` if not running.
    #[must_use]
    pub fn tick(&self, now_ms: f64) -> Option<f64> {
        if self.state != State::Running {
            return None;
        }
        let elapsed = (now_ms - self.started_ms).max(0.0);
        let phase = (elapsed % self.period_ms) / self.period_ms;
        let offset = if phase < 0.5 {
            self.easing.apply(phase * 2.0)
        } else {
            1.0 - self.easing.apply((phase - 0.5) * 2.0)
        };
        Some(offset * self.amplitude)
    }

    /// Number of whole periods completed by `now_ms`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cycles_at(&self, now_ms: f64) -> u64 {
        if self.state != State::Running {
            return 0;
        }
        ((now_ms - self.started_ms).max(0.0) / self.period_ms).floor() as u64
    }
}
