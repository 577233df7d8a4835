// Host-side integration tests for the particle morph engine.
// The main crate is wasm-only, so we pull the pure-Rust core tree in by path.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod ember;

use ember::color::hex_to_linear;
use ember::config::MorphConfig;
use ember::error::EngineError;
use ember::gesture::{GestureEvent, HandUpdate};
use ember::morph::ParticleMorph;
use ember::shapes::fibonacci_sphere_point;

const DT: f32 = 1.0 / 60.0;

fn make_engine() -> ParticleMorph {
    ParticleMorph::new(MorphConfig::default(), 1280, 720, 42).unwrap()
}

fn run_frames(m: &mut ParticleMorph, frames: usize) {
    for _ in 0..frames {
        m.step(DT);
    }
}

#[test]
fn construction_matches_config() {
    let m = make_engine();
    let n = MorphConfig::EMBER.particle_count;
    assert_eq!(m.particle_count(), n);
    assert_eq!(m.rest_shape().len(), n);
    assert_eq!(m.scatter_shape().len(), n);
    assert_eq!(m.live_positions(), m.rest_shape());
    assert_eq!(m.morph_factor(), 0.0);
    assert_eq!(m.anchor(), glam::Vec3::ZERO);
    assert_eq!(m.color(), hex_to_linear(MorphConfig::EMBER.color_core));
    assert!((m.camera().aspect - 1280.0 / 720.0).abs() < 1e-6);
}

#[test]
fn rest_shape_is_on_sphere_and_scatter_in_shell() {
    let m = make_engine();
    let cfg = m.config();
    for p in m.rest_shape() {
        assert!((p.length() - cfg.sphere_radius).abs() < 1e-5);
    }
    for p in m.scatter_shape() {
        let r = p.length();
        assert!(r >= cfg.sphere_radius - 1e-4 && r <= cfg.explosion_radius + 1e-4);
    }
}

#[test]
fn first_rest_point_matches_analytic_south_pole() {
    let m = make_engine();
    let expected = fibonacci_sphere_point(0, 5000, 1.5);
    assert!((m.rest_shape()[0] - expected).length() < 1e-6);
    assert!((m.rest_shape()[0].z + 1.5).abs() < 1e-6);
}

#[test]
fn live_positions_hit_both_endpoints_exactly() {
    let mut m = make_engine();
    m.interpolate();
    assert_eq!(m.live_positions(), m.rest_shape());

    m.trigger_explosion();
    run_frames(&mut m, 60);
    assert_eq!(m.morph_factor(), 1.0);
    assert_eq!(m.live_positions(), m.scatter_shape());
}

#[test]
fn live_positions_are_linear_blend_and_idempotent() {
    let mut m = make_engine();
    m.trigger_explosion();
    run_frames(&mut m, 12);
    let f = m.morph_factor();
    assert!(f > 0.0 && f < 1.0);

    m.interpolate();
    let first: Vec<_> = m.live_positions().to_vec();
    m.interpolate();
    assert_eq!(m.live_positions(), &first[..]);

    for i in [0, 17, 2500, 4999] {
        let expected = m.rest_shape()[i] * (1.0 - f) + m.scatter_shape()[i] * f;
        assert!((m.live_positions()[i] - expected).length() < 1e-6);
    }
}

#[test]
fn explosion_completes_after_its_duration_and_color_follows() {
    let mut m = make_engine();
    m.trigger_explosion();
    run_frames(&mut m, 48); // 0.8s at 60Hz
    assert!((m.morph_factor() - 1.0).abs() < 1e-3);
    let outer = hex_to_linear(MorphConfig::EMBER.color_outer);
    assert!(
        (m.color() - outer).abs().max_element() < 0.05,
        "color {:?} not near {:?}",
        m.color(),
        outer
    );
}

#[test]
fn explode_then_assemble_settles_at_zero_without_leaving_unit_range() {
    let mut m = make_engine();
    m.trigger_explosion();
    m.trigger_assembly();
    for _ in 0..90 {
        m.step(DT);
        let f = m.morph_factor();
        assert!((0.0..=1.0).contains(&f), "f={f}");
    }
    assert_eq!(m.morph_factor(), 0.0);
}

#[test]
fn assembly_mid_explosion_decreases_monotonically() {
    let mut m = make_engine();
    m.trigger_explosion();
    run_frames(&mut m, 18);
    let peak = m.morph_factor();
    assert!(peak > 0.5);

    m.trigger_assembly();
    assert_eq!(m.morph_target(), 0.0);
    let mut prev = peak;
    for _ in 0..40 {
        m.step(DT);
        let f = m.morph_factor();
        assert!(f <= prev + 1e-6, "f rose from {prev} to {f}");
        assert!(f >= 0.0);
        prev = f;
    }
    assert_eq!(m.morph_factor(), 0.0);
    // color drifts back to the core palette once f drops under the midpoint
    run_frames(&mut m, 60);
    let core = hex_to_linear(MorphConfig::EMBER.color_core);
    assert!((m.color() - core).abs().max_element() < 0.05);
}

#[test]
fn repeated_trigger_does_not_restart_the_tween() {
    let mut m = make_engine();
    m.trigger_explosion();
    run_frames(&mut m, 24); // 0.4s
    m.trigger_explosion();
    run_frames(&mut m, 25); // past the original 0.8s end
    assert_eq!(m.morph_factor(), 1.0);

    // already assembled: nothing to do
    let mut idle = make_engine();
    idle.trigger_assembly();
    idle.step(DT);
    assert_eq!(idle.morph_factor(), 0.0);
    assert_eq!(idle.morph_target(), 0.0);
}

#[test]
fn anchor_converges_without_oscillation() {
    let mut m = make_engine();
    let target = m.camera().screen_to_plane(0.25, 0.75);
    let mut prev = (m.anchor() - target).length();
    for _ in 0..30 {
        m.update_anchor(0.25, 0.75);
        m.step(DT);
        let d = (m.anchor() - target).length();
        assert!(d <= prev + 1e-6, "distance grew from {prev} to {d}");
        prev = d;
    }
    assert!((m.anchor() - target).length() < 1e-5);
    assert_eq!(m.anchor_target(), m.anchor());
}

#[test]
fn latest_anchor_update_wins() {
    let mut m = make_engine();
    m.update_anchor(0.0, 0.0);
    run_frames(&mut m, 3);
    m.update_anchor(1.0, 1.0);
    let b = m.camera().screen_to_plane(1.0, 1.0);
    assert_eq!(m.anchor_target(), b);
    run_frames(&mut m, 20);
    assert!((m.anchor() - b).length() < 1e-5);
}

#[test]
fn resize_updates_aspect_used_by_anchor_mapping() {
    let mut m = make_engine();
    m.on_resize(800, 600);
    assert!((m.camera().aspect - 800.0 / 600.0).abs() < 1e-6);
    m.update_anchor(1.0, 0.5);
    run_frames(&mut m, 20);
    let expected_x = 8.0 * 37.5_f32.to_radians().tan() * (800.0 / 600.0);
    assert!((m.anchor().x - expected_x).abs() < 1e-2, "{:?}", m.anchor());
    assert!(m.anchor().y.abs() < 1e-3);
}

#[test]
fn spin_advances_per_frame_and_feeds_model_matrix() {
    let mut m = make_engine();
    run_frames(&mut m, 10);
    let r = m.rotation();
    assert!((r.x - 0.02).abs() < 1e-6);
    assert!((r.y - 0.01).abs() < 1e-6);

    // the model matrix leaves the anchor at the cloud's center
    let center = m.model_matrix().transform_point3(glam::Vec3::ZERO);
    assert!((center - m.anchor()).length() < 1e-6);
    let snap = m.frame_snapshot();
    assert_eq!(snap.model, m.model_matrix());
    assert_eq!(snap.color, m.color());
}

#[test]
fn gestures_map_to_triggers() {
    let mut m = make_engine();
    m.apply_gesture(GestureEvent::PinchDetected);
    assert_eq!(m.morph_target(), 1.0);
    m.apply_hand(HandUpdate {
        x_norm: 0.5,
        y_norm: 0.5,
        event: Some(GestureEvent::OpenPalmDetected),
    });
    assert_eq!(m.morph_target(), 0.0);
    assert!(m.anchor_target().length() < 1e-4);
}

#[test]
fn invalid_configs_are_rejected() {
    let zero = MorphConfig {
        particle_count: 0,
        ..MorphConfig::EMBER
    };
    assert!(matches!(
        ParticleMorph::new(zero, 100, 100, 1),
        Err(EngineError::InvalidConfig(_))
    ));
    let inverted = MorphConfig {
        explosion_radius: 1.0,
        ..MorphConfig::EMBER
    };
    assert!(inverted.validate().is_err());
    let nan = MorphConfig {
        sphere_radius: f32::NAN,
        ..MorphConfig::EMBER
    };
    assert!(nan.validate().is_err());
}

#[test]
fn alternate_palette_keeps_geometry() {
    let theme = MorphConfig::EMBER.with_palette(0x38BDF8, 0xE0F2FE);
    assert_eq!(theme.particle_count, MorphConfig::EMBER.particle_count);
    assert_eq!(theme.sphere_radius, MorphConfig::EMBER.sphere_radius);
    let m = ParticleMorph::new(theme, 640, 480, 5).unwrap();
    assert_eq!(m.color(), hex_to_linear(0x38BDF8));
}

#[test]
fn same_seed_same_scatter() {
    let a = make_engine();
    let b = make_engine();
    assert_eq!(a.scatter_shape(), b.scatter_shape());
}

#[test]
fn page_background_hex_is_css() {
    use ember::color::hex_css;
    use ember::constants::COLOR_BG;
    assert_eq!(hex_css(COLOR_BG), "#1c1917");
    assert_eq!(hex_css(0xF97316), "#f97316");
    assert_eq!(hex_css(0x00000A), "#00000a");
}

#[test]
fn host_reported_size_drives_projection() {
    // embedded canvas smaller than the window
    let mut m = make_engine();
    m.on_resize(640, 360);
    let p = m.frame_snapshot().projection;
    let aspect = p.y_axis.y / p.x_axis.x;
    assert!((aspect - 640.0 / 360.0).abs() < 1e-4, "aspect {aspect}");
}
