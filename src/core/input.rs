use super::constants::{KEY_ASSEMBLE, KEY_EXPLODE, KEY_OVERLAY};

/// What a key press asks for, independent of the DOM event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Explode,
    Assemble,
    ToggleOverlay,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    let key = key.to_ascii_lowercase();
    match key.as_str() {
        k if k == KEY_EXPLODE => Some(KeyAction::Explode),
        k if k == KEY_ASSEMBLE => Some(KeyAction::Assemble),
        k if k == KEY_OVERLAY => Some(KeyAction::ToggleOverlay),
        _ => None,
    }
}

/// Normalized [0, 1] position of a client-space point inside an element box.
/// Degenerate boxes map to the center.
#[inline]
pub fn canvas_uv(
    client_x: f32,
    client_y: f32,
    left: f32,
    top: f32,
    width: f32,
    height: f32,
) -> [f32; 2] {
    if width > 0.0 && height > 0.0 {
        [(client_x - left) / width, (client_y - top) / height]
    } else {
        [0.5, 0.5]
    }
}
