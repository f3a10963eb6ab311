use super::*;

const VIEW: ViewportSnapshot = ViewportSnapshot { scroll_y: 0.0, width: 1280.0, height: 800.0 };

fn section_at(top: f64) -> ElementBounds {
    ElementBounds::vertical(top, top + 600.0, VIEW.width)
}

// =============================================================
// intersects
// =============================================================

#[test]
fn zero_margin_matches_plain_overlap() {
    assert!(intersects(&section_at(799.0), &VIEW, 0.0));
    assert!(!intersects(&section_at(800.0), &VIEW, 0.0));
    assert!(!intersects(&section_at(-600.0), &VIEW, 0.0));
    assert!(intersects(&section_at(-599.0), &VIEW, 0.0));
}

#[test]
fn negative_margin_requires_element_inside_by_margin() {
    // Root shrinks to 100..700.
    assert!(!intersects(&section_at(750.0), &VIEW, -100.0));
    assert!(!intersects(&section_at(700.0), &VIEW, -100.0));
    assert!(intersects(&section_at(699.0), &VIEW, -100.0));
}

#[test]
fn positive_margin_triggers_early() {
    assert!(intersects(&section_at(850.0), &VIEW, 100.0));
    assert!(!intersects(&section_at(900.0), &VIEW, 100.0));
}

#[test]
fn collapsed_root_never_intersects() {
    let tiny = ViewportSnapshot { scroll_y: 0.0, width: 150.0, height: 150.0 };
    let bounds = ElementBounds::new(0.0, 150.0, 0.0, 150.0);
    assert!(!intersects(&bounds, &tiny, -100.0));
}

#[test]
fn off_screen_horizontally_does_not_intersect() {
    let bounds = ElementBounds::new(200.0, 400.0, 1400.0, 1600.0);
    assert!(!intersects(&bounds, &VIEW, 0.0));
}

// =============================================================
// RevealGate
// =============================================================

#[test]
fn default_gate_uses_shrinking_margin() {
    let gate = RevealGate::default();
    assert!((gate.root_margin_px() + 100.0).abs() < f64::EPSILON);
    assert!(!gate.has_fired());
}

#[test]
fn gate_stays_pending_until_in_view() {
    let mut gate = RevealGate::default();
    assert_eq!(gate.observe(&section_at(2000.0), &VIEW), RevealDecision::Pending);
    assert_eq!(gate.observe(&section_at(1200.0), &VIEW), RevealDecision::Pending);
    assert!(!gate.has_fired());
}

#[test]
fn gate_fires_exactly_once() {
    let mut gate = RevealGate::default();
    assert_eq!(gate.observe(&section_at(400.0), &VIEW), RevealDecision::Fire);
    assert_eq!(gate.observe(&section_at(400.0), &VIEW), RevealDecision::Done);
    assert!(gate.has_fired());
}

#[test]
fn scrolling_away_and_back_does_not_refire() {
    let mut gate = RevealGate::default();
    assert_eq!(gate.observe(&section_at(300.0), &VIEW), RevealDecision::Fire);
    assert_eq!(gate.observe(&section_at(-5000.0), &VIEW), RevealDecision::Done);
    assert_eq!(gate.observe(&section_at(300.0), &VIEW), RevealDecision::Done);
    assert!(gate.has_fired());
}
