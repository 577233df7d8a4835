// Host-side tests for the easing curves and the overwritable tween scheduler.
// The main crate is wasm-only, so we pull the pure-Rust core tree in by path.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod ember;

use ember::ease::{Animated, Curve, Tween};
use glam::Vec3;

const CURVES: [Curve; 4] = [
    Curve::Linear,
    Curve::Power1Out,
    Curve::Power2Out,
    Curve::Power2InOut,
];

#[test]
fn curves_hit_their_endpoints() {
    for c in CURVES {
        assert_eq!(c.apply(0.0), 0.0, "{c:?} at 0");
        assert!((c.apply(1.0) - 1.0).abs() < 1e-6, "{c:?} at 1");
    }
}

#[test]
fn curves_are_monotonic_and_bounded() {
    for c in CURVES {
        let mut prev = c.apply(0.0);
        for i in 1..=200 {
            let v = c.apply(i as f32 / 200.0);
            assert!(v >= prev - 1e-6, "{c:?} decreased at step {i}");
            assert!((0.0..=1.0).contains(&v), "{c:?} left [0,1]: {v}");
            prev = v;
        }
    }
}

#[test]
fn curves_clamp_out_of_range_time() {
    for c in CURVES {
        assert_eq!(c.apply(-0.5), 0.0);
        assert!((c.apply(3.0) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn out_curves_lead_and_in_out_is_symmetric() {
    assert!(Curve::Power1Out.apply(0.25) > 0.25);
    assert!(Curve::Power2Out.apply(0.25) > Curve::Power1Out.apply(0.25));
    assert!((Curve::Power2InOut.apply(0.5) - 0.5).abs() < 1e-6);
    let a = Curve::Power2InOut.apply(0.2);
    let b = Curve::Power2InOut.apply(0.8);
    assert!((a + b - 1.0).abs() < 1e-5);
}

#[test]
fn tween_value_tracks_progress() {
    let mut tw = Tween::new(2.0_f32, 4.0, 1.0, Curve::Linear);
    assert_eq!(tw.value(), 2.0);
    tw.elapsed = 0.5;
    assert!((tw.value() - 3.0).abs() < 1e-6);
    tw.elapsed = 2.0;
    assert!(tw.finished());
    assert_eq!(tw.value(), 4.0);
}

#[test]
fn animated_reaches_target_exactly_and_goes_idle() {
    let mut a = Animated::new(0.0_f32);
    a.ease_to(1.0, 0.5, Curve::Power2Out);
    assert!(a.is_animating());
    for _ in 0..40 {
        a.advance(1.0 / 60.0);
    }
    assert_eq!(a.value(), 1.0);
    assert!(!a.is_animating());
    assert_eq!(a.target(), 1.0);
}

#[test]
fn newer_ease_overwrites_instead_of_queueing() {
    let mut a = Animated::new(0.0_f32);
    a.ease_to(1.0, 1.0, Curve::Linear);
    a.advance(0.5);
    let mid = a.value();
    assert!((mid - 0.5).abs() < 1e-5);

    a.ease_to(0.0, 1.0, Curve::Linear);
    assert_eq!(a.target(), 0.0);
    // restarts from where it was, heading to the new target
    a.advance(0.5);
    assert!((a.value() - mid * 0.5).abs() < 1e-5);
    a.advance(0.6);
    assert_eq!(a.value(), 0.0);
    assert!(!a.is_animating());
}

#[test]
fn cancel_freezes_current_value() {
    let mut a = Animated::new(Vec3::ZERO);
    a.ease_to(Vec3::new(2.0, 0.0, 0.0), 1.0, Curve::Linear);
    a.advance(0.25);
    let frozen = a.value();
    a.cancel();
    a.advance(1.0);
    assert_eq!(a.value(), frozen);
    assert_eq!(a.target(), frozen);
}

#[test]
fn zero_duration_snaps_immediately() {
    let mut a = Animated::new(0.0_f32);
    a.ease_to(1.0, 0.0, Curve::Linear);
    assert_eq!(a.value(), 1.0);
    assert!(!a.is_animating());
}

#[test]
fn negative_dt_does_not_rewind() {
    let mut a = Animated::new(0.0_f32);
    a.ease_to(1.0, 1.0, Curve::Linear);
    a.advance(0.5);
    let mid = a.value();
    a.advance(-0.25);
    assert_eq!(a.value(), mid);
}
