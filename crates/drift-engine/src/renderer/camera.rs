use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Mat4, Vec3};

/// Perspective camera looking down the drift axis.
/// Produces a view-projection matrix mapping world units to clip space.
pub struct Camera {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Camera position in world space.
    pub position: Vec3,
    /// Fixed downward pitch so the terrain fills the lower frame.
    pub pitch: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            fov_y: 75.0_f32.to_radians(),
            aspect: aspect_of(viewport_width, viewport_height),
            near: 0.1,
            far: 100.0,
            position: Vec3::new(0.0, 3.0, 5.0),
            pitch: -0.2,
        }
    }

    /// Recompute the aspect ratio (e.g. on window resize).
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.aspect = aspect_of(viewport_width, viewport_height);
    }

    /// Build the combined view-projection matrix.
    pub fn view_projection(&self) -> Mat4 {
        let projection = Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far);
        let view = (Mat4::from_translation(self.position) * Mat4::from_rotation_x(self.pitch))
            .inverse();
        projection * view
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection().to_cols_array_2d(),
        }
    }
}

fn aspect_of(width: f32, height: f32) -> f32 {
    if height > 0.0 {
        width / height
    } else {
        1.0
    }
}

/// Model matrix for the whole-field orientation.
pub fn model_matrix(rotation: Vec3) -> Mat4 {
    Mat4::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_projection_is_finite() {
        let cam = Camera::new(1920.0, 1080.0);
        let m = cam.view_projection();
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn resize_updates_aspect() {
        let mut cam = Camera::new(800.0, 600.0);
        cam.resize(1920.0, 1080.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn zero_height_viewport_falls_back_to_square() {
        let cam = Camera::new(800.0, 0.0);
        assert_eq!(cam.aspect, 1.0);
    }

    #[test]
    fn origin_projects_inside_frustum() {
        let cam = Camera::new(1280.0, 720.0);
        let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0, "ndc={:?}", ndc);
    }

    #[test]
    fn uniform_is_pod() {
        let cam = Camera::new(1280.0, 720.0);
        let flat: [f32; 16] = bytemuck::cast(cam.uniform());
        assert_eq!(flat, cam.view_projection().to_cols_array());
    }

    #[test]
    fn identity_rotation_gives_identity_model() {
        let m = model_matrix(Vec3::ZERO);
        assert_eq!(m, Mat4::IDENTITY);
    }

    #[test]
    fn model_matrix_rotates_points() {
        use std::f32::consts::FRAC_PI_2;
        let m = model_matrix(Vec3::new(0.0, FRAC_PI_2, 0.0));
        let p = m.transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!(p.x.abs() < 1e-6);
        assert!((p.z.abs() - 1.0).abs() < 1e-6);
    }
}
