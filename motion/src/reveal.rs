//! One-shot "reveal when scrolled into view" gate.
//!
//! The gate evaluates an element's client rect against the viewport, grown
//! or shrunk by a root margin (CSS `rootMargin` semantics: negative values
//! shrink). The first overlap fires the gate; afterwards it reports
//! [`RevealDecision::Done`] forever, whatever the geometry.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::REVEAL_ROOT_MARGIN_PX;
use crate::viewport::ViewportSnapshot;

/// An element's bounding client rect, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementBounds {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl ElementBounds {
    #[must_use]
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self { top, bottom, left, right }
    }

    /// Full-width element spanning `top..bottom`.
    #[must_use]
    pub fn vertical(top: f64, bottom: f64, viewport_width: f64) -> Self {
        Self { top, bottom, left: 0.0, right: viewport_width }
    }
}

/// Outcome of one observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealDecision {
    /// Not yet in view; keep observing.
    Pending,
    /// In view for the first time; reveal now.
    Fire,
    /// Already fired earlier; observation is over.
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealGate {
    root_margin_px: f64,
    fired: bool,
}

impl Default for RevealGate {
    fn default() -> Self {
        Self::new(REVEAL_ROOT_MARGIN_PX)
    }
}

impl RevealGate {
    #[must_use]
    pub fn new(root_margin_px: f64) -> Self {
        Self { root_margin_px, fired: false }
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    #[must_use]
    pub fn root_margin_px(&self) -> f64 {
        self.root_margin_px
    }

    /// Check `bounds` against `viewport`.
    pub fn observe(&mut self, bounds: &ElementBounds, viewport: &ViewportSnapshot) -> RevealDecision {
        if self.fired {
            return RevealDecision::Done;
        }
        if intersects(bounds, viewport, self.root_margin_px) {
            self.fired = true;
            RevealDecision::Fire
        } else {
            RevealDecision::Pending
        }
    }
}

/// Whether `bounds` overlaps the viewport expanded by `margin` on all sides.
#[must_use]
pub fn intersects(bounds: &ElementBounds, viewport: &ViewportSnapshot, margin: f64) -> bool {
    let root_top = -margin;
    let root_bottom = viewport.height + margin;
    let root_left = -margin;
    let root_right = viewport.width + margin;
    if root_bottom <= root_top || root_right <= root_left {
        return false;
    }
    bounds.top < root_bottom && bounds.bottom > root_top && bounds.left < root_right && bounds.right > root_left
}
