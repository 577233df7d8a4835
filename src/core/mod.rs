pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod ease;
pub mod error;
pub mod gesture;
pub mod input;
pub mod lifecycle;
pub mod morph;
pub mod overlay;
pub mod shapes;
pub mod surface;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use ease::*;
pub use error::*;
pub use gesture::*;
pub use input::*;
pub use lifecycle::*;
pub use morph::*;
pub use overlay::*;
pub use surface::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
