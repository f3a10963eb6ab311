#![allow(clippy::float_cmp)]

use super::*;

fn running_at(start: f64) -> Oscillator {
    let mut osc = Oscillator::default();
    osc.start(start);
    osc
}

#[test]
fn idle_oscillator_paints_nothing() {
    let osc = Oscillator::default();
    assert!(!osc.is_running());
    assert_eq!(osc.tick(500.0), None);
}

#[test]
fn default_period_is_two_seconds() {
    assert_eq!(Oscillator::default().period_ms(), 2000.0);
}

#[test]
fn keyframes_go_zero_peak_zero() {
    let osc = running_at(0.0);
    assert_eq!(osc.tick(0.0), Some(0.0));
    let peak = osc.tick(1000.0).unwrap_or(f64::NAN);
    assert!((peak - 10.0).abs() < 1e-6);
    let quarter = osc.tick(500.0).unwrap_or(f64::NAN);
    assert!(quarter > 0.0 && quarter < 10.0);
    let end = osc.tick(1999.999).unwrap_or(f64::NAN);
    assert!(end.abs() < 1e-3);
}

#[test]
fn loops_indefinitely_with_fixed_period() {
    let osc = running_at(100.0);
    for cycle in [1_u64, 10, 1_000, 100_000] {
        #[allow(clippy::cast_precision_loss)]
        let t = 100.0 + 2000.0 * cycle as f64;
        assert_eq!(osc.cycles_at(t), cycle);
        let a = osc.tick(t + 500.0).unwrap_or(f64::NAN);
        let b = osc.tick(100.0 + 500.0).unwrap_or(f64::NAN);
        assert!((a - b).abs() < 1e-6, "cycle {cycle} drifted: {a} vs {b}");
    }
    assert!(osc.is_running());
}

#[test]
fn stop_ends_all_updates() {
    let mut osc = running_at(0.0);
    assert!(osc.tick(250.0).is_some());
    osc.stop();
    assert!(osc.is_stopped());
    assert_eq!(osc.tick(250.0), None);
    assert_eq!(osc.tick(1_000_000.0), None);
    assert_eq!(osc.cycles_at(1_000_000.0), 0);
}

#[test]
fn stopped_oscillator_cannot_restart() {
    let mut osc = running_at(0.0);
    osc.stop();
    osc.start(10.0);
    assert!(!osc.is_running());
}

#[test]
fn start_twice_keeps_first_origin() {
    let mut osc = running_at(0.0);
    osc.start(700.0);
    assert_eq!(osc.cycles_at(2000.0), 1);
}
