//! Animation engine for the portfolio page.
//!
//! This crate has no browser dependencies. It models every entrance and
//! scroll transition on the page as plain state advanced by `tick(now_ms)`,
//! so the UI layer only has to supply a clock and paint the resulting
//! [`style::StyleState`]s. Everything here runs (and is tested) natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`consts`] | Shared timing and geometry constants |
//! | [`easing`] | Easing curves, including a cubic-bezier solver |
//! | [`style`] | Interpolatable visual state and CSS projection |
//! | [`variant`] | Named `hidden`/`visible` presets with timing |
//! | [`transition`] | Per-element `Hidden → Animating → Visible` state machine |
//! | [`choreography`] | Container plus staggered children, revealed once |
//! | [`reveal`] | One-shot viewport intersection gate |
//! | [`oscillator`] | Infinite keyframe loop with explicit stop |
//! | [`presence`] | Enter/exit animation around mount and unmount |
//! | [`viewport`] | Viewport snapshots and the subscription hub |

pub mod choreography;
pub mod consts;
pub mod easing;
pub mod oscillator;
pub mod presence;
pub mod reveal;
pub mod style;
pub mod transition;
pub mod variant;
pub mod viewport;
