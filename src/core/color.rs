use glam::Vec3;

/// Decode one sRGB-encoded channel in [0, 1] to linear light.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a packed `0xRRGGBB` sRGB color into linear RGB.
///
/// Blending happens in linear space; the swapchain's sRGB format re-encodes
/// on write.
pub fn hex_to_linear(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    Vec3::new(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
}

/// One step of exponential approach: `current += (target - current) * alpha`.
///
/// Called once per frame, so the effective speed depends on refresh rate.
#[inline]
pub fn approach(current: Vec3, target: Vec3, alpha: f32) -> Vec3 {
    current + (target - current) * alpha.clamp(0.0, 1.0)
}

/// CSS `#rrggbb` form of a packed sRGB color.
pub fn hex_css(hex: u32) -> String {
    format!("#{:06x}", hex & 0xFF_FFFF)
}
