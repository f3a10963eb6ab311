#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Construction
// =============================================================

#[test]
fn default_is_identity() {
    assert_eq!(StyleState::default(), StyleState::IDENTITY);
}

#[test]
fn builders_set_single_fields() {
    let s = StyleState::IDENTITY.with_opacity(0.0).with_translate_y(30.0);
    assert_eq!(s.opacity, 0.0);
    assert_eq!(s.translate_y, 30.0);
    assert_eq!(s.scale, 1.0);
    assert_eq!(s.reveal, 1.0);
}

// =============================================================
// lerp
// =============================================================

#[test]
fn lerp_endpoints() {
    let a = StyleState::IDENTITY.with_opacity(0.0).with_scale(0.8);
    let b = StyleState::IDENTITY;
    assert_eq!(a.lerp(&b, 0.0), a);
    assert_eq!(a.lerp(&b, 1.0), b);
}

#[test]
fn lerp_midpoint() {
    let a = StyleState::IDENTITY.with_opacity(0.0).with_translate_y(30.0);
    let mid = a.lerp(&StyleState::IDENTITY, 0.5);
    assert!((mid.opacity - 0.5).abs() < 1e-12);
    assert!((mid.translate_y - 15.0).abs() < 1e-12);
}

// =============================================================
// to_css
// =============================================================

#[test]
fn identity_renders_empty_css() {
    assert_eq!(StyleState::IDENTITY.to_css(), "");
}

#[test]
fn hidden_fade_in_up_css() {
    let s = StyleState::IDENTITY.with_opacity(0.0).with_translate_y(30.0);
    assert_eq!(s.to_css(), "opacity: 0; transform: translateY(30px)");
}

#[test]
fn translate_and_scale_share_one_transform() {
    let s = StyleState::IDENTITY.with_translate_y(-100.0).with_scale(0.8);
    assert_eq!(s.to_css(), "transform: translateY(-100px) scale(0.8)");
}

#[test]
fn collapsed_reveal_clips_from_bottom() {
    let s = StyleState::IDENTITY.with_opacity(0.0).with_reveal(0.0);
    assert_eq!(s.to_css(), "opacity: 0; clip-path: inset(0 0 100% 0); overflow: hidden");
}

#[test]
fn opacity_is_clamped_in_css() {
    let s = StyleState::IDENTITY.with_opacity(-0.2);
    assert_eq!(s.to_css(), "opacity: 0");
}

#[test]
fn css_values_are_rounded() {
    let s = StyleState::IDENTITY.with_translate_y(12.345_678);
    assert_eq!(s.to_css(), "transform: translateY(12.3457px)");
}
