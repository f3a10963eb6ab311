//! Named transition presets shared by every section of the page.
//!
//! A [`Variant`] pairs a `hidden` and a `visible` [`StyleState`] with the
//! [`Timing`] used to move between them. Containers additionally carry a
//! stagger interval that spaces out their children.

#[cfg(test)]
#[path = "variant_test.rs"]
mod variant_test;

use crate::consts::{
    DEFAULT_TWEEN_MS, FADE_IN_UP_DURATION_MS, FADE_IN_UP_OFFSET_PX, MENU_PANEL_DURATION_MS, NAV_SLIDE_DURATION_MS,
    NAV_SLIDE_OFFSET_PX, SCALE_IN_DURATION_MS, SCALE_IN_FROM, SCROLL_INDICATOR_DELAY_MS, STAGGER_CHILDREN_MS,
};
use crate::easing::Easing;
use crate::style::StyleState;

/// Duration, delay, and curve of a single transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl Default for Timing {
    fn default() -> Self {
        Self { duration_ms: DEFAULT_TWEEN_MS, delay_ms: 0.0, easing: Easing::default() }
    }
}

/// A `hidden` → `visible` transition description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub hidden: StyleState,
    pub visible: StyleState,
    pub timing: Timing,
    /// Spacing between successive children when this variant drives a
    /// container. `None` for leaf variants.
    pub stagger_children_ms: Option<f64>,
}

impl Variant {
    /// Same variant with an extra start delay.
    #[must_use]
    pub fn delayed(mut self, delay_ms: f64) -> Self {
        self.timing.delay_ms = delay_ms.max(0.0);
        self
    }

    /// Total time from start until the visible state is reached.
    #[must_use]
    pub fn settle_ms(&self) -> f64 {
        self.timing.delay_ms + self.timing.duration_ms
    }
}

/// The presets used on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Slide up 30px while fading in. Text and list blocks.
    FadeInUp,
    /// Opacity-only container that staggers its children.
    StaggerContainer,
    /// Grow from 0.8 while fading in. Card-grid items.
    ScaleIn,
    /// Navigation bar entrance from above the viewport.
    NavSlideDown,
    /// Mobile menu panel: fade plus height collapse.
    MenuPanel,
    /// Hero scroll indicator: late plain fade.
    DelayedFade,
}

impl Preset {
    #[must_use]
    pub fn variant(self) -> Variant {
        match self {
            Self::FadeInUp => Variant {
                hidden: StyleState::IDENTITY.with_opacity(0.0).with_translate_y(FADE_IN_UP_OFFSET_PX),
                visible: StyleState::IDENTITY,
                timing: Timing { duration_ms: FADE_IN_UP_DURATION_MS, delay_ms: 0.0, easing: Easing::EaseOut },
                stagger_children_ms: None,
            },
            Self::StaggerContainer => Variant {
                hidden: StyleState::IDENTITY.with_opacity(0.0),
                visible: StyleState::IDENTITY,
                timing: Timing::default(),
                stagger_children_ms: Some(STAGGER_CHILDREN_MS),
            },
            Self::ScaleIn => Variant {
                hidden: StyleState::IDENTITY.with_opacity(0.0).with_scale(SCALE_IN_FROM),
                visible: StyleState::IDENTITY,
                timing: Timing { duration_ms: SCALE_IN_DURATION_MS, ..Timing::default() },
                stagger_children_ms: None,
            },
            Self::NavSlideDown => Variant {
                hidden: StyleState::IDENTITY.with_translate_y(NAV_SLIDE_OFFSET_PX),
                visible: StyleState::IDENTITY,
                timing: Timing { duration_ms: NAV_SLIDE_DURATION_MS, delay_ms: 0.0, easing: Easing::EaseOut },
                stagger_children_ms: None,
            },
            Self::MenuPanel => Variant {
                hidden: StyleState::IDENTITY.with_opacity(0.0).with_reveal(0.0),
                visible: StyleState::IDENTITY,
                timing: Timing { duration_ms: MENU_PANEL_DURATION_MS, delay_ms: 0.0, easing: Easing::EaseInOut },
                stagger_children_ms: None,
            },
            Self::DelayedFade => Variant {
                hidden: StyleState::IDENTITY.with_opacity(0.0),
                visible: StyleState::IDENTITY,
                timing: Timing { delay_ms: SCROLL_INDICATOR_DELAY_MS, ..Timing::default() },
                stagger_children_ms: None,
            },
        }
    }
}

impl From<Preset> for Variant {
    fn from(preset: Preset) -> Self {
        preset.variant()
    }
}
