use glam::Vec3;
use rand::Rng;
use std::f64::consts::PI;

/// Point `i` of `n` on an evenly spread spiral over a sphere of `radius`.
///
/// Colatitude walks from the south pole (`i = 0`) to the north pole via
/// `acos`, longitude advances by `sqrt(n * pi)` per radian of colatitude.
pub fn fibonacci_sphere_point(i: usize, n: usize, radius: f32) -> Vec3 {
    let n = n.max(1) as f64;
    let phi = (-1.0 + (2.0 * i as f64) / n).acos();
    let theta = (n * PI).sqrt() * phi;
    let r = radius as f64;
    Vec3::new(
        (r * theta.cos() * phi.sin()) as f32,
        (r * theta.sin() * phi.sin()) as f32,
        (r * phi.cos()) as f32,
    )
}

pub fn fibonacci_sphere(n: usize, radius: f32) -> Vec<Vec3> {
    (0..n).map(|i| fibonacci_sphere_point(i, n, radius)).collect()
}

/// Random points in the shell between `inner` and `outer`.
///
/// Directions are uniform over the sphere; the radius is uniform in
/// `[inner, outer)`, so the outer region is sparser than the inner one.
pub fn scatter_shell<R: Rng + ?Sized>(n: usize, inner: f32, outer: f32, rng: &mut R) -> Vec<Vec3> {
    let inner = inner as f64;
    let span = (outer as f64 - inner).max(0.0);
    (0..n)
        .map(|_| {
            let u: f64 = rng.gen();
            let v: f64 = rng.gen();
            let theta = 2.0 * PI * u;
            let phi = (2.0 * v - 1.0).acos();
            let r = inner + rng.gen::<f64>() * span;
            Vec3::new(
                (r * phi.sin() * theta.cos()) as f32,
                (r * phi.sin() * theta.sin()) as f32,
                (r * phi.cos()) as f32,
            )
        })
        .collect()
}
