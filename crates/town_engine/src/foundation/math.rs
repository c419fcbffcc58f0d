//! Math utilities and types
//!
//! Thin aliases over nalgebra plus the handful of OpenGL-convention matrix
//! builders the renderer needs.

pub use nalgebra::{Matrix4, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

/// Extension trait for Mat4 with the OpenGL-convention builders used by the renderer
///
/// All matrices are right-handed, Y-up, with clip-space depth in [-1, 1], which is
/// what `glm::perspective` / `glm::lookAt` produce. nalgebra stores matrices
/// column-major, so `as_slice()` can be handed straight to `glUniformMatrix4fv`
/// with `transpose = GL_FALSE`.
pub trait Mat4Ext {
    /// Create a perspective projection matrix (vertical FOV in radians)
    fn perspective_gl(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Create a look-at view matrix
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;

    /// Model matrix equal to `translate(translation) * scale(scale)`
    fn translate_scale(translation: Vec3, scale: Vec3) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn perspective_gl(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::new_perspective(aspect, fov_y, near, far)
    }

    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        Mat4::look_at_rh(&Point3::from(eye), &Point3::from(target), &up)
    }

    fn translate_scale(translation: Vec3, scale: Vec3) -> Mat4 {
        Mat4::new_translation(&translation) * Mat4::new_nonuniform_scaling(&scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degree_radian_roundtrip() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI, epsilon = 1e-6);
        assert_relative_eq!(utils::rad_to_deg(utils::deg_to_rad(45.0)), 45.0, epsilon = 1e-4);
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let eye = Vec3::new(0.0, 0.0, 3.0);
        let view = Mat4::look_at(eye, Vec3::new(0.0, 0.0, 2.0), Vec3::y());

        let eye_in_view = view * Vec4::new(eye.x, eye.y, eye.z, 1.0);
        assert_relative_eq!(eye_in_view, Vec4::new(0.0, 0.0, 0.0, 1.0), epsilon = 1e-6);

        // The target sits one unit down the -Z axis of view space
        let target_in_view = view * Vec4::new(0.0, 0.0, 2.0, 1.0);
        assert_relative_eq!(target_in_view, Vec4::new(0.0, 0.0, -1.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_perspective_maps_near_and_far_planes() {
        let projection = Mat4::perspective_gl(utils::deg_to_rad(45.0), 1.25, 0.1, 100.0);

        let near = projection * Vec4::new(0.0, 0.0, -0.1, 1.0);
        let far = projection * Vec4::new(0.0, 0.0, -100.0, 1.0);

        assert_relative_eq!(near.z / near.w, -1.0, epsilon = 1e-4);
        assert_relative_eq!(far.z / far.w, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_translate_scale_order() {
        let model = Mat4::translate_scale(Vec3::new(2.5, 0.0, -0.5), Vec3::new(0.8, 2.5, 0.6));

        // The unit cube's far corner is scaled first, then translated
        let corner = model * Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert_relative_eq!(corner, Vec4::new(3.3, 2.5, 0.1, 1.0), epsilon = 1e-6);
    }
}
