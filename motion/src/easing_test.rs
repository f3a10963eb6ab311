#![allow(clippy::float_cmp)]

use super::*;

const ALL: [Easing; 5] = [
    Easing::Linear,
    Easing::Ease,
    Easing::EaseOut,
    Easing::EaseInOut,
    Easing::Bezier(CubicBezier::new(0.2, 0.8, 0.4, 1.0)),
];

#[test]
fn endpoints_are_fixed() {
    for easing in ALL {
        assert!(easing.apply(0.0).abs() < 1e-9, "{easing:?} at t=0");
        assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{easing:?} at t=1");
    }
}

#[test]
fn input_is_clamped() {
    for easing in ALL {
        assert_eq!(easing.apply(-3.0), easing.apply(0.0));
        assert_eq!(easing.apply(7.0), easing.apply(1.0));
    }
}

#[test]
fn curves_are_monotonic() {
    for easing in ALL {
        let mut prev = 0.0;
        for i in 0..=100 {
            let t = f64::from(i) / 100.0;
            let v = easing.apply(t);
            assert!(v + 1e-9 >= prev, "{easing:?} not monotonic at t={t}");
            prev = v;
        }
    }
}

#[test]
fn linear_is_identity() {
    assert_eq!(Easing::Linear.apply(0.25), 0.25);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
}

#[test]
fn ease_out_runs_ahead_of_linear() {
    for t in [0.1, 0.3, 0.5, 0.7, 0.9] {
        assert!(Easing::EaseOut.apply(t) > t, "ease-out should lead at t={t}");
    }
}

#[test]
fn ease_in_out_is_symmetric() {
    for t in [0.1, 0.25, 0.4] {
        let a = Easing::EaseInOut.apply(t);
        let b = Easing::EaseInOut.apply(1.0 - t);
        assert!((a + b - 1.0).abs() < 1e-4, "asymmetric at t={t}: {a} + {b}");
    }
    assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-4);
}

#[test]
fn bezier_matching_linear_controls_is_linear() {
    let curve = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
    for t in [0.1, 0.5, 0.8] {
        assert!((curve.apply(t) - t).abs() < 1e-5);
    }
}

#[test]
fn default_is_ease() {
    assert_eq!(Easing::default(), Easing::Ease);
}
