use glam::{Mat4, Vec3};
use mazewalk_kernel::Walker;

/// Perspective camera that rides on a walker.
/// Projection parameters live here; pose comes from the walker every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkerCamera {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Eye height above world y = 0.
    pub eye_height: f32,
}

impl Default for WalkerCamera {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            eye_height: 0.0,
        }
    }
}

impl WalkerCamera {
    /// Recompute aspect after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn eye(&self, walker: &Walker) -> Vec3 {
        Vec3::new(walker.position.x, self.eye_height, walker.position.y)
    }

    pub fn view_matrix(&self, walker: &Walker) -> Mat4 {
        let eye = self.eye(walker);
        let fwd = walker.forward();
        Mat4::look_at_rh(eye, eye + Vec3::new(fwd.x, 0.0, fwd.y), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self, walker: &Walker) -> Mat4 {
        self.projection_matrix() * self.view_matrix(walker)
    }
}
