/// Web host tuning constants.
///
/// DOM ids the host page is expected to provide, plus limits applied to the
/// render surface. Scene/animation constants live in `core::constants`.
// Render surface
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Loading overlay
pub const OVERLAY_ID: &str = "start-overlay";
pub const OVERLAY_SPINNER_ID: &str = "overlay-spinner";
pub const OVERLAY_ENTER_ID: &str = "overlay-enter";
pub const OVERLAY_FADE_SEC: f32 = 0.8;

// Selfie video is shown mirrored, so the hand x must be flipped to match
pub const MIRROR_HAND_X: bool = true;
