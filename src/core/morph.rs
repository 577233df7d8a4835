use glam::{Mat4, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::camera::PerspectiveCamera;
use super::color::{approach, hex_to_linear};
use super::config::MorphConfig;
use super::constants::*;
use super::ease::{Animated, Curve};
use super::error::EngineError;
use super::gesture::{GestureEvent, HandUpdate};
use super::shapes::{fibonacci_sphere, scatter_shell};

/// Everything the renderer needs for one frame, in world terms.
#[derive(Clone, Copy, Debug)]
pub struct FrameSnapshot {
    pub view: Mat4,
    pub projection: Mat4,
    pub model: Mat4,
    pub color: Vec3,
    pub opacity: f32,
    pub point_size: f32,
}

/// Point cloud that blends between an assembled sphere and a scattered shell.
///
/// Owns three parallel per-particle buffers:
/// - `rest`: Fibonacci-sphere targets, fixed after construction
/// - `scatter`: random shell targets, fixed after construction
/// - `live`: what gets drawn, rebuilt every frame as
///   `rest * (1 - f) + scatter * f`
///
/// The morph factor `f` and the cloud anchor are eased by overwritable
/// tweens; the shared color chases one of two palette endpoints with a fixed
/// per-frame blend.
///
/// Typical usage:
/// - Construct with `ParticleMorph::new(config, width, height, seed)`
/// - Feed input via `update_anchor`, `trigger_explosion`, `trigger_assembly`
/// - Call `step(dt)` once per display refresh, then upload `live_positions()`
pub struct ParticleMorph {
    config: MorphConfig,
    rest: Vec<Vec3>,
    scatter: Vec<Vec3>,
    live: Vec<Vec3>,
    factor: Animated<f32>,
    anchor: Animated<Vec3>,
    color: Vec3,
    color_core: Vec3,
    color_outer: Vec3,
    rotation: Vec2, // (y, z) radians
    camera: PerspectiveCamera,
}

impl ParticleMorph {
    pub fn new(config: MorphConfig, width: u32, height: u32, seed: u64) -> Result<Self, EngineError> {
        config.validate()?;
        let n = config.particle_count;
        let rest = fibonacci_sphere(n, config.sphere_radius);
        let mut rng = StdRng::seed_from_u64(seed);
        let scatter = scatter_shell(n, config.sphere_radius, config.explosion_radius, &mut rng);
        let live = rest.clone();
        let color_core = hex_to_linear(config.color_core);
        let color_outer = hex_to_linear(config.color_outer);
        let camera = PerspectiveCamera::new(
            CAMERA_FOV_Y_DEGREES,
            width,
            height,
            CAMERA_NEAR,
            CAMERA_FAR,
            CAMERA_Z,
        );
        Ok(Self {
            config,
            rest,
            scatter,
            live,
            factor: Animated::new(0.0),
            anchor: Animated::new(Vec3::ZERO),
            color: color_core,
            color_core,
            color_outer,
            rotation: Vec2::ZERO,
            camera,
        })
    }

    // ---------------- Input ----------------

    /// Ease the cloud toward the world point under normalized screen
    /// coordinates. A new target replaces the previous one mid-flight.
    pub fn update_anchor(&mut self, x_norm: f32, y_norm: f32) {
        let target = self.camera.screen_to_plane(x_norm, y_norm);
        if !target.is_finite() {
            log::warn!("[morph] ignoring non-finite anchor target for ({x_norm}, {y_norm})");
            return;
        }
        if self.anchor.target() == target {
            return;
        }
        self.anchor.ease_to(target, ANCHOR_EASE_SEC, Curve::Power1Out);
    }

    pub fn trigger_explosion(&mut self) {
        if self.factor.target() == 1.0 {
            return;
        }
        log::debug!("[morph] explode from f={:.3}", self.factor.value());
        self.factor.ease_to(1.0, EXPLODE_EASE_SEC, Curve::Power2Out);
    }

    pub fn trigger_assembly(&mut self) {
        if self.factor.target() == 0.0 {
            return;
        }
        log::debug!("[morph] assemble from f={:.3}", self.factor.value());
        self.factor.ease_to(0.0, ASSEMBLE_EASE_SEC, Curve::Power2InOut);
    }

    pub fn apply_gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::PinchDetected => self.trigger_explosion(),
            GestureEvent::OpenPalmDetected => self.trigger_assembly(),
        }
    }

    pub fn apply_hand(&mut self, update: HandUpdate) {
        self.update_anchor(update.x_norm, update.y_norm);
        if let Some(ev) = update.event {
            self.apply_gesture(ev);
        }
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    // ---------------- Per-frame ----------------

    /// Advance the eased properties by `dt_sec`.
    pub fn advance(&mut self, dt_sec: f32) {
        self.factor.advance(dt_sec);
        let f = self.factor.value().clamp(0.0, 1.0);
        if f != self.factor.value() {
            self.factor.set(f);
        }
        self.anchor.advance(dt_sec);
    }

    /// Rebuild the live buffer from the current morph factor.
    pub fn interpolate(&mut self) {
        let f = self.morph_factor();
        let g = 1.0 - f;
        for ((live, rest), scatter) in self.live.iter_mut().zip(&self.rest).zip(&self.scatter) {
            *live = *rest * g + *scatter * f;
        }
    }

    /// Spin, morph, and recolor for one displayed frame.
    pub fn update_frame(&mut self) {
        self.rotation.x += SPIN_Y_PER_FRAME;
        self.rotation.y += SPIN_Z_PER_FRAME;
        self.interpolate();
        let target = if self.morph_factor() > COLOR_SWITCH_THRESHOLD {
            self.color_outer
        } else {
            self.color_core
        };
        self.color = approach(self.color, target, COLOR_BLEND_PER_FRAME);
    }

    pub fn step(&mut self, dt_sec: f32) {
        self.advance(dt_sec);
        self.update_frame();
    }

    pub fn frame_snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            view: self.camera.view_matrix(),
            projection: self.camera.projection_matrix(),
            model: self.model_matrix(),
            color: self.color,
            opacity: POINT_OPACITY,
            point_size: POINT_SIZE,
        }
    }

    // ---------------- Accessors ----------------

    /// Translation to the anchor, then the idle spin (Y before Z).
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.anchor.value())
            * Mat4::from_rotation_y(self.rotation.x)
            * Mat4::from_rotation_z(self.rotation.y)
    }

    #[inline]
    pub fn morph_factor(&self) -> f32 {
        self.factor.value()
    }

    #[inline]
    pub fn morph_target(&self) -> f32 {
        self.factor.target()
    }

    #[inline]
    pub fn anchor(&self) -> Vec3 {
        self.anchor.value()
    }

    #[inline]
    pub fn anchor_target(&self) -> Vec3 {
        self.anchor.target()
    }

    #[inline]
    pub fn color(&self) -> Vec3 {
        self.color
    }

    #[inline]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn rest_shape(&self) -> &[Vec3] {
        &self.rest
    }

    pub fn scatter_shape(&self) -> &[Vec3] {
        &self.scatter
    }

    pub fn live_positions(&self) -> &[Vec3] {
        &self.live
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    pub fn particle_count(&self) -> usize {
        self.live.len()
    }
}
