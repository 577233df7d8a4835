use glam::Vec3;

/// Easing curves used by the scheduler, named after their GSAP counterparts
/// (`power1` is quadratic, `power2` is cubic).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    Linear,
    Power1Out,
    Power2Out,
    Power2InOut,
}

impl Curve {
    /// Map normalized time to eased progress. Input is clamped to [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Curve::Power2Out => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Curve::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// Values that can be blended linearly by a tween.
pub trait Interpolate: Copy + PartialEq {
    fn interpolate(self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn interpolate(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for Vec3 {
    #[inline]
    fn interpolate(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

/// A single timed transition from `from` to `to`.
#[derive(Clone, Copy, Debug)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub duration: f32,
    pub elapsed: f32,
    pub curve: Curve,
}

impl<T: Interpolate> Tween<T> {
    pub fn new(from: T, to: T, duration: f32, curve: Curve) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            curve,
        }
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn value(&self) -> T {
        if self.finished() {
            return self.to;
        }
        self.from.interpolate(self.to, self.curve.apply(self.progress()))
    }
}

/// A value driven toward targets by overwritable tweens.
///
/// Scheduling a new ease always replaces the in-flight one, starting from
/// wherever the value currently is. Nothing queues. The owner calls
/// `advance(dt)` once per tick.
#[derive(Clone, Debug)]
pub struct Animated<T> {
    value: T,
    tween: Option<Tween<T>>,
}

impl<T: Interpolate> Animated<T> {
    pub fn new(value: T) -> Self {
        Self { value, tween: None }
    }

    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Where the value is headed: the active tween's endpoint, or the value
    /// itself when idle.
    #[inline]
    pub fn target(&self) -> T {
        self.tween.as_ref().map_or(self.value, |tw| tw.to)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn ease_to(&mut self, target: T, duration: f32, curve: Curve) {
        self.tween = Some(Tween::new(self.value, target, duration, curve));
        if duration <= 0.0 {
            self.advance(0.0);
        }
    }

    /// Stop the active tween, leaving the value where it is.
    pub fn cancel(&mut self) {
        self.tween = None;
    }

    /// Jump straight to `value`, dropping any tween.
    pub fn set(&mut self, value: T) {
        self.tween = None;
        self.value = value;
    }

    pub fn advance(&mut self, dt_sec: f32) {
        let Some(tw) = self.tween.as_mut() else {
            return;
        };
        tw.elapsed += dt_sec.max(0.0);
        self.value = tw.value();
        if tw.finished() {
            self.value = tw.to;
            self.tween = None;
        }
    }
}

