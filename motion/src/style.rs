//! Interpolatable visual state for an animated element.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

/// The animatable properties of one element.
///
/// `translate_y` is in CSS pixels. `reveal` is the visible fraction of the
/// element's height (1.0 = fully shown), used for height-collapsing panels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleState {
    pub opacity: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub reveal: f64,
}

impl Default for StyleState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl StyleState {
    /// Fully visible, untransformed.
    pub const IDENTITY: Self = Self { opacity: 1.0, translate_y: 0.0, scale: 1.0, reveal: 1.0 };

    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub const fn with_translate_y(mut self, px: f64) -> Self {
        self.translate_y = px;
        self
    }

    #[must_use]
    pub const fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub const fn with_reveal(mut self, reveal: f64) -> Self {
        self.reveal = reveal;
        self
    }

    /// Linear blend from `self` to `to`. `t` is not clamped so eased curves
    /// may overshoot.
    #[must_use]
    pub fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            opacity: lerp(self.opacity, to.opacity, t),
            translate_y: lerp(self.translate_y, to.translate_y, t),
            scale: lerp(self.scale, to.scale, t),
            reveal: lerp(self.reveal, to.reveal, t),
        }
    }

    /// Inline CSS for this state. Properties at their identity value are
    /// omitted, so a settled element renders an empty string.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut decls = Vec::with_capacity(3);

        let opacity = self.opacity.clamp(0.0, 1.0);
        if !near(opacity, 1.0) {
            decls.push(format!("opacity: {}", round4(opacity)));
        }

        let mut transforms = Vec::with_capacity(2);
        if !near(self.translate_y, 0.0) {
            transforms.push(format!("translateY({}px)", round4(self.translate_y)));
        }
        if !near(self.scale, 1.0) {
            transforms.push(format!("scale({})", round4(self.scale)));
        }
        if !transforms.is_empty() {
            decls.push(format!("transform: {}", transforms.join(" ")));
        }

        let reveal = self.reveal.clamp(0.0, 1.0);
        if !near(reveal, 1.0) {
            let hidden_pct = round4((1.0 - reveal) * 100.0);
            decls.push(format!("clip-path: inset(0 0 {hidden_pct}% 0)"));
            decls.push("overflow: hidden".to_owned());
        }

        decls.join("; ")
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
fn near(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-4
}

/// Round to 4 decimals; adding `0.0` folds `-0` into `0`.
fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0 + 0.0
}
