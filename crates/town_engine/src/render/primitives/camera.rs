//! # Free-Fly Camera
//!
//! Yaw/pitch camera driven by keyboard translation, mouse-look and scroll zoom.
//!
//! ## Design Principles
//! - **Basis from angles**: front/right/up are recomputed from yaw and pitch on
//!   every orientation change instead of being rotated incrementally, so no
//!   drift accumulates over long sessions
//! - **Total API**: every input is accepted; only pitch and zoom are clamped
//! - **Library-agnostic**: produces plain matrices, no GL calls

use crate::core::config::CameraConfig;
use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// Largest pitch magnitude reachable with pitch constraint enabled, in degrees
///
/// Kept a hair under 89° so the clamped pitch stays strictly inside (-89°, 89°).
pub const PITCH_LIMIT: f32 = 89.0 - 1.0e-3;

/// Continuous movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    /// Along +front
    Forward,
    /// Along -front
    Backward,
    /// Along -right
    Left,
    /// Along +right
    Right,
    /// Along +world up, independent of pitch
    Up,
    /// Along -world up, independent of pitch
    Down,
}

/// Free-fly camera
///
/// # Coordinate System
/// Right-handed, Y-up. Yaw is measured from +X towards +Z, so the default yaw of
/// -90° looks down -Z. The basis always satisfies `right = front × world_up` and
/// `up = right × front`, all unit length.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    /// Units per second for keyboard movement
    pub movement_speed: f32,
    /// Degrees of rotation per unit of mouse offset
    pub mouse_sensitivity: f32,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
}

impl Camera {
    /// Default yaw, looking down -Z
    pub const DEFAULT_YAW: f32 = -90.0;
    /// Default movement speed
    pub const DEFAULT_SPEED: f32 = 2.5;
    /// Default mouse sensitivity
    pub const DEFAULT_SENSITIVITY: f32 = 0.1;
    /// Default zoom, also the widest
    pub const DEFAULT_ZOOM: f32 = 45.0;
    /// Narrowest zoom
    pub const MIN_ZOOM: f32 = 1.0;

    /// Create a camera at `position` facing -Z with default speeds and zoom
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, Vec3::y(), Self::DEFAULT_YAW, 0.0)
    }

    /// Create a camera with explicit world up, yaw and pitch (degrees)
    ///
    /// The starting pitch is not clamped; the first constrained mouse update does that.
    pub fn with_orientation(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: -Vec3::z(),
            right: Vec3::x(),
            up: Vec3::y(),
            world_up,
            yaw,
            pitch,
            movement_speed: Self::DEFAULT_SPEED,
            mouse_sensitivity: Self::DEFAULT_SENSITIVITY,
            zoom: Self::DEFAULT_ZOOM,
            min_zoom: Self::MIN_ZOOM,
            max_zoom: Self::DEFAULT_ZOOM,
        };
        camera.update_camera_vectors();
        camera
    }

    /// Create a camera from configuration
    pub fn from_config(config: &CameraConfig) -> Self {
        let [x, y, z] = config.position;
        let [ux, uy, uz] = config.world_up;
        let mut camera = Self::with_orientation(Vec3::new(x, y, z), Vec3::new(ux, uy, uz), config.yaw, config.pitch);
        camera.movement_speed = config.movement_speed;
        camera.mouse_sensitivity = config.mouse_sensitivity;
        camera.set_zoom_range(config.min_zoom, config.max_zoom);
        camera.zoom = camera.clamp_zoom(config.zoom);
        camera
    }

    /// Set the bounds scroll zoom is clamped to; the current zoom is re-clamped
    pub fn set_zoom_range(&mut self, min: f32, max: f32) {
        if !(min > 0.0 && min <= max) {
            log::warn!("Unusable zoom range [{}, {}]; scroll zoom will pin to {}", min, max, max);
        }
        self.min_zoom = min;
        self.max_zoom = max;
        self.zoom = self.clamp_zoom(self.zoom);
    }

    /// View matrix looking from `position` along `front`
    pub fn get_view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection using the current zoom as vertical field of view
    pub fn get_projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_gl(utils::deg_to_rad(self.zoom), aspect, near, far)
    }

    /// Translate along the camera basis, scaled by `movement_speed * delta_time`
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.world_up * velocity,
            CameraMovement::Down => self.position -= self.world_up * velocity,
        }
    }

    /// Rotate by mouse offsets, optionally clamping pitch short of the poles
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            let clamped = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
            if clamped != self.pitch {
                log::trace!("Camera pitch clamped: {:.3} -> {:.3}", self.pitch, clamped);
            }
            self.pitch = clamped;
        }

        self.update_camera_vectors();
    }

    /// Narrow (positive offset) or widen the field of view
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        let requested = self.zoom - y_offset;
        self.zoom = self.clamp_zoom(requested);
        if requested != self.zoom {
            log::trace!("Camera zoom clamped: {:.2} -> {:.2}", requested, self.zoom);
        }
    }

    /// Unit view direction
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit camera right vector
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit camera up vector
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Yaw in degrees
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Zoom in degrees, used as vertical field of view
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Zoom bounds `(min, max)`
    pub fn zoom_range(&self) -> (f32, f32) {
        (self.min_zoom, self.max_zoom)
    }

    // Total over inverted or NaN bounds, unlike `f32::clamp`
    fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }

    fn update_camera_vectors(&mut self) {
        let (sin_yaw, cos_yaw) = utils::deg_to_rad(self.yaw).sin_cos();
        let (sin_pitch, cos_pitch) = utils::deg_to_rad(self.pitch).sin_cos();

        self.front = Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize();
        self.right = self.front.cross(&self.world_up).normalize();
        self.up = self.right.cross(&self.front).normalize();
    }
}

impl Default for Camera {
    /// Camera three units back from the origin, looking at it
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0))
    }
}
