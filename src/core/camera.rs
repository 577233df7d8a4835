use glam::{Mat4, Vec3};

/// Perspective camera sitting on the +Z axis and looking down -Z.
///
/// Mirrors the classic scene setup: fixed vertical field of view, near/far
/// planes, and an aspect ratio that follows the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, width: u32, height: u32, near: f32, far: f32, z: f32) -> Self {
        Self {
            fov_y_degrees,
            aspect: aspect_of(width, height),
            near,
            far,
            position: Vec3::new(0.0, 0.0, z),
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = aspect_of(width, height);
    }

    /// Clip-space projection (depth in [0, 1], as wgpu expects).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position - Vec3::Z, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Map a normalized-device-coordinate point back to world space.
    pub fn unproject(&self, ndc: Vec3) -> Vec3 {
        self.view_projection().inverse().project_point3(ndc)
    }

    /// Map normalized screen coordinates (origin top-left, y down) onto the
    /// world plane `z = 0`.
    ///
    /// Casts a ray from the eye through the unprojected point and walks it
    /// until it meets the plane. Values outside [0, 1] are not rejected; they
    /// extrapolate off-screen.
    pub fn screen_to_plane(&self, x_norm: f32, y_norm: f32) -> Vec3 {
        let ndc = Vec3::new(x_norm * 2.0 - 1.0, -(y_norm * 2.0) + 1.0, 0.5);
        let dir = (self.unproject(ndc) - self.position).normalize();
        if dir.z.abs() < 1e-6 {
            return Vec3::new(self.position.x, self.position.y, 0.0);
        }
        let distance = -self.position.z / dir.z;
        self.position + dir * distance
    }
}

#[inline]
fn aspect_of(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}
