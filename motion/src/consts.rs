//! Shared numeric constants for the motion crate.

// ── Presets ─────────────────────────────────────────────────────

/// Duration of the `fadeInUp` preset.
pub const FADE_IN_UP_DURATION_MS: f64 = 600.0;

/// Vertical offset the `fadeInUp` preset starts from, in CSS pixels.
pub const FADE_IN_UP_OFFSET_PX: f64 = 30.0;

/// Duration of the `scaleIn` preset.
pub const SCALE_IN_DURATION_MS: f64 = 500.0;

/// Scale factor the `scaleIn` preset starts from.
pub const SCALE_IN_FROM: f64 = 0.8;

/// Delay between successive children of a stagger container.
pub const STAGGER_CHILDREN_MS: f64 = 100.0;

/// Opacity tween for containers and plain fades.
pub const DEFAULT_TWEEN_MS: f64 = 300.0;

// ── Navigation ──────────────────────────────────────────────────

/// Off-screen offset the navigation bar slides down from.
pub const NAV_SLIDE_OFFSET_PX: f64 = -100.0;

/// Duration of the navigation bar entrance.
pub const NAV_SLIDE_DURATION_MS: f64 = 500.0;

/// Duration of the mobile menu enter/exit.
pub const MENU_PANEL_DURATION_MS: f64 = 250.0;

// ── Hero scroll indicator ───────────────────────────────────────

/// Delay before the scroll indicator fades in.
pub const SCROLL_INDICATOR_DELAY_MS: f64 = 1500.0;

/// Period of one `0 → peak → 0` oscillation.
pub const SCROLL_INDICATOR_PERIOD_MS: f64 = 2000.0;

/// Peak downward offset of the scroll indicator, in CSS pixels.
pub const SCROLL_INDICATOR_AMPLITUDE_PX: f64 = 10.0;

// ── Viewport ────────────────────────────────────────────────────

/// Root margin applied to every section reveal check. Negative values shrink
/// the viewport, so a section must be this far inside before it reveals.
pub const REVEAL_ROOT_MARGIN_PX: f64 = -100.0;

/// Interval between frame ticks driven by the UI layer.
pub const FRAME_INTERVAL_MS: u64 = 16;
