// Host-side tests for the rest (sphere) and scatter (shell) target shapes.
// The main crate is wasm-only, so we pull the pure-Rust core tree in by path.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod ember;

use ember::shapes::{fibonacci_sphere, fibonacci_sphere_point, scatter_shell};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn sphere_points_lie_on_the_radius() {
    let pts = fibonacci_sphere(5000, 1.5);
    assert_eq!(pts.len(), 5000);
    for (i, p) in pts.iter().enumerate() {
        assert!(
            (p.length() - 1.5).abs() < 1e-5,
            "point {i} has radius {}",
            p.length()
        );
    }
}

#[test]
fn first_sphere_point_is_the_south_pole() {
    let n = 5000usize;
    let p = fibonacci_sphere_point(0, n, 1.5);
    let phi = (-1.0_f64).acos();
    let theta = ((n as f64) * std::f64::consts::PI).sqrt() * phi;
    let expected = [
        1.5 * theta.cos() * phi.sin(),
        1.5 * theta.sin() * phi.sin(),
        1.5 * phi.cos(),
    ];
    assert!((p.x as f64 - expected[0]).abs() < 1e-6);
    assert!((p.y as f64 - expected[1]).abs() < 1e-6);
    assert!((p.z as f64 - expected[2]).abs() < 1e-6);
    assert!((p.z + 1.5).abs() < 1e-6);
}

#[test]
fn sphere_spreads_from_south_to_north() {
    let pts = fibonacci_sphere(1000, 1.0);
    // z = cos(phi) = -1 + 2i/n increases strictly with i
    for w in pts.windows(2) {
        assert!(w[1].z > w[0].z);
    }
    let mean = pts.iter().copied().sum::<glam::Vec3>() / pts.len() as f32;
    assert!(mean.x.abs() < 0.05 && mean.y.abs() < 0.05);
}

#[test]
fn scatter_points_stay_inside_the_shell() {
    let mut rng = StdRng::seed_from_u64(7);
    let pts = scatter_shell(5000, 1.5, 8.0, &mut rng);
    assert_eq!(pts.len(), 5000);
    for p in &pts {
        let r = p.length();
        assert!(r >= 1.5 - 1e-4 && r <= 8.0 + 1e-4, "radius {r} outside shell");
    }
}

#[test]
fn scatter_covers_every_octant() {
    let mut rng = StdRng::seed_from_u64(11);
    let pts = scatter_shell(2000, 1.0, 2.0, &mut rng);
    let mut seen = [false; 8];
    for p in &pts {
        let idx = (p.x > 0.0) as usize | ((p.y > 0.0) as usize) << 1 | ((p.z > 0.0) as usize) << 2;
        seen[idx] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn scatter_is_reproducible_per_seed() {
    let a = scatter_shell(64, 1.5, 8.0, &mut StdRng::seed_from_u64(42));
    let b = scatter_shell(64, 1.5, 8.0, &mut StdRng::seed_from_u64(42));
    let c = scatter_shell(64, 1.5, 8.0, &mut StdRng::seed_from_u64(43));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn degenerate_shell_collapses_onto_inner_radius() {
    let mut rng = StdRng::seed_from_u64(3);
    for p in scatter_shell(100, 2.0, 2.0, &mut rng) {
        assert!((p.length() - 2.0).abs() < 1e-5);
    }
}
