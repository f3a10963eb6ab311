//! Staggered reveal of a container and its children.
//!
//! A [`Choreography`] owns the container's own [`Transition`] plus one
//! transition per registered child. Children are registered in document
//! order; on [`Choreography::reveal`] child `i` starts `i * stagger` after
//! the container. Reveal is one-shot: once triggered the group never returns
//! to hidden.

#[cfg(test)]
#[path = "choreography_test.rs"]
mod choreography_test;

use crate::style::StyleState;
use crate::transition::{Phase, Transition};
use crate::variant::{Preset, Variant};

/// Index of a registered child within its choreography.
pub type ChildIndex = usize;

#[derive(Debug, Clone)]
pub struct Choreography {
    container: Transition,
    children: Vec<Transition>,
    stagger_ms: f64,
    revealed_at_ms: Option<f64>,
}

impl Default for Choreography {
    fn default() -> Self {
        Self::new(Preset::StaggerContainer)
    }
}

impl Choreography {
    #[must_use]
    pub fn new(container: impl Into<Variant>) -> Self {
        let container = container.into();
        Self {
            stagger_ms: container.stagger_children_ms.unwrap_or(0.0),
            container: Transition::new(container),
            children: Vec::new(),
            revealed_at_ms: None,
        }
    }

    /// Register the next child in document order.
    ///
    /// A child registered after the reveal joins already visible.
    pub fn register(&mut self, variant: impl Into<Variant>) -> ChildIndex {
        let transition = if self.is_revealed() {
            Transition::settled_visible(variant)
        } else {
            Transition::new(variant)
        };
        self.children.push(transition);
        self.children.len() - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// `true` once [`Self::reveal`] has fired. Never resets.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed_at_ms.is_some()
    }

    #[must_use]
    pub fn revealed_at_ms(&self) -> Option<f64> {
        self.revealed_at_ms
    }

    /// Start the container and schedule every child.
    ///
    /// Returns `false` (and changes nothing) if already revealed.
    pub fn reveal(&mut self, now_ms: f64) -> bool {
        if self.is_revealed() {
            return false;
        }
        self.revealed_at_ms = Some(now_ms);
        self.container.show(now_ms);
        for (i, child) in self.children.iter_mut().enumerate() {
            child.show_after(now_ms, self.stagger_ms * index_f64(i));
        }
        true
    }

    /// Advance every transition. Returns `true` while anything is still
    /// running.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.container.tick(now_ms);
        for child in &mut self.children {
            child.tick(now_ms);
        }
        !self.is_settled()
    }

    /// `true` when no transition is pending or running.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.container.is_settled() && self.children.iter().all(Transition::is_settled)
    }

    #[must_use]
    pub fn container_style(&self) -> StyleState {
        self.container.style()
    }

    /// Style of child `index`; unknown indices render as identity.
    #[must_use]
    pub fn child_style(&self, index: ChildIndex) -> StyleState {
        self.children.get(index).map_or(StyleState::IDENTITY, Transition::style)
    }

    #[must_use]
    pub fn child_phase(&self, index: ChildIndex) -> Option<Phase> {
        self.children.get(index).map(Transition::phase)
    }

    /// Clock time at which child `index` begins to move.
    #[must_use]
    pub fn child_start_ms(&self, index: ChildIndex) -> Option<f64> {
        self.children.get(index).and_then(Transition::motion_start_ms)
    }
}

#[allow(clippy::cast_precision_loss)]
fn index_f64(i: usize) -> f64 {
    i as f64
}
