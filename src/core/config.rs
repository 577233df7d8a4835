use super::constants::{COLOR_CORE, COLOR_OUTER, EXPLOSION_RADIUS, PARTICLE_COUNT, SPHERE_RADIUS};
use super::error::EngineError;

/// Fixed configuration record for a particle morph engine.
///
/// Fields:
/// - `particle_count`: number of particles, fixed for the engine lifetime
/// - `sphere_radius`: radius of the assembled (rest) sphere
/// - `explosion_radius`: outer radius of the scatter shell
/// - `color_core`: sRGB hex used while the cloud is assembled
/// - `color_outer`: sRGB hex used once the cloud is mostly exploded
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphConfig {
    pub particle_count: usize,
    pub sphere_radius: f32,
    pub explosion_radius: f32,
    pub color_core: u32,
    pub color_outer: u32,
}

impl MorphConfig {
    /// Default ember theme: orange core fading to white when exploded.
    pub const EMBER: MorphConfig = MorphConfig {
        particle_count: PARTICLE_COUNT,
        sphere_radius: SPHERE_RADIUS,
        explosion_radius: EXPLOSION_RADIUS,
        color_core: COLOR_CORE,
        color_outer: COLOR_OUTER,
    };

    /// Same geometry with a different palette.
    pub fn with_palette(self, color_core: u32, color_outer: u32) -> Self {
        Self {
            color_core,
            color_outer,
            ..self
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.particle_count == 0 {
            return Err(EngineError::InvalidConfig("particle_count must be > 0"));
        }
        if !self.sphere_radius.is_finite() || self.sphere_radius <= 0.0 {
            return Err(EngineError::InvalidConfig(
                "sphere_radius must be finite and positive",
            ));
        }
        if !self.explosion_radius.is_finite() || self.explosion_radius < self.sphere_radius {
            return Err(EngineError::InvalidConfig(
                "explosion_radius must be finite and >= sphere_radius",
            ));
        }
        Ok(())
    }
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self::EMBER
    }
}
