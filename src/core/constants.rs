// Scene and animation tuning constants shared by the engine and the web host.

// Particle cloud
pub const PARTICLE_COUNT: usize = 5000;
pub const SPHERE_RADIUS: f32 = 1.5;
pub const EXPLOSION_RADIUS: f32 = 8.0;

// Ember palette (sRGB hex)
pub const COLOR_CORE: u32 = 0xF97316; // orange 500
pub const COLOR_OUTER: u32 = 0xFFFFFF; // white
pub const COLOR_BG: u32 = 0x1C1917; // stone 900

// Camera
pub const CAMERA_FOV_Y_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_Z: f32 = 8.0;

// Point sprites
pub const POINT_SIZE: f32 = 0.15; // world units, attenuated by depth
pub const POINT_OPACITY: f32 = 0.9;

// Idle spin, radians per frame
pub const SPIN_Y_PER_FRAME: f32 = 0.002;
pub const SPIN_Z_PER_FRAME: f32 = 0.001;

// Color follows the morph factor with a fixed per-frame blend
pub const COLOR_BLEND_PER_FRAME: f32 = 0.1;
pub const COLOR_SWITCH_THRESHOLD: f32 = 0.5;

// Tween durations (seconds)
pub const ANCHOR_EASE_SEC: f32 = 0.2;
pub const EXPLODE_EASE_SEC: f32 = 0.8;
pub const ASSEMBLE_EASE_SEC: f32 = 0.6;

// Gesture input
pub const PINCH_THRESHOLD: f32 = 0.08; // normalized thumb-index distance
pub const CAPTURE_WIDTH: u32 = 1280;
pub const CAPTURE_HEIGHT: u32 = 720;

// Fallback keyboard bindings
pub const KEY_EXPLODE: &str = "e";
pub const KEY_ASSEMBLE: &str = "a";
pub const KEY_OVERLAY: &str = "h";
