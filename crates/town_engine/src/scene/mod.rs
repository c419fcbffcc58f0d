//! # Scene State
//!
//! Everything that changes while the townscape runs: the camera, the light rig
//! and the toggle state that drives it, and the mouse-look tracker. Input
//! handling mutates it through [`SceneState::handle_event`] and
//! [`SceneState::apply_movement`]; the renderer only reads it.

pub mod layout;

#[cfg(test)]
mod frame_tests;

pub use layout::{lamp_color, lamp_models, town_layout, MeshKind, SceneObject};

use crate::core::config::AppConfig;
use crate::foundation::math::Mat4;
use crate::input::{InputEvent, LightingState, MouseLook};
use crate::render::lighting::LightRig;
use crate::render::primitives::{Camera, CameraMovement};

/// Mutable state of the running townscape
#[derive(Debug, Clone)]
pub struct SceneState {
    /// Free-fly camera
    pub camera: Camera,
    /// One directional and four point lights
    pub lights: LightRig,
    /// Keyboard-driven lighting switches
    pub lighting: LightingState,
    /// Cursor tracker for mouse-look
    pub mouse: MouseLook,
    /// Lit-pass objects in draw order
    pub objects: Vec<SceneObject>,
    near: f32,
    far: f32,
    close_requested: bool,
}

impl SceneState {
    /// Build the start-up scene from configuration
    pub fn new(config: &AppConfig) -> Self {
        let lighting = LightingState::from_config(&config.lighting);
        Self {
            camera: Camera::from_config(&config.camera),
            lights: LightRig::new(&lighting),
            lighting,
            mouse: MouseLook::new(),
            objects: town_layout(),
            near: config.camera.near,
            far: config.camera.far,
            close_requested: false,
        }
    }

    /// React to one discrete input event
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::LightToggle(key) => {
                self.lighting = self.lighting.reduce(key);
                self.lights.apply_state(&self.lighting);
                log::info!("{:?} toggled: {:?}", key, self.lighting);
            }
            InputEvent::CursorMoved { x, y } => {
                let (x_offset, y_offset) = self.mouse.offsets(x, y);
                self.camera.process_mouse_movement(x_offset, y_offset, true);
            }
            InputEvent::Scrolled { y } => self.camera.process_mouse_scroll(y),
            InputEvent::CloseRequested => self.close_requested = true,
            InputEvent::FramebufferResized { .. } => {}
        }
    }

    /// Apply held movement keys for a frame lasting `delta_time` seconds
    pub fn apply_movement<I>(&mut self, movements: I, delta_time: f32)
    where
        I: IntoIterator<Item = CameraMovement>,
    {
        for movement in movements {
            self.camera.process_keyboard(movement, delta_time);
        }
    }

    /// Projection for the current zoom
    pub fn projection(&self, aspect: f32) -> Mat4 {
        self.camera.get_projection_matrix(aspect, self.near, self.far)
    }

    /// View matrix of the current camera pose
    pub fn view(&self) -> Mat4 {
        self.camera.get_view_matrix()
    }

    /// Whether Escape or the window close button was seen
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::input::LightKey;
    use approx::assert_relative_eq;

    fn scene() -> SceneState {
        SceneState::new(&AppConfig::default())
    }

    #[test]
    fn test_start_state() {
        let scene = scene();

        assert_relative_eq!(scene.camera.position, Vec3::new(1.0, 1.5, 14.0));
        assert!(!scene.lights.directional.is_on());
        assert!(scene.lights.point_lights_on());
        assert_eq!(scene.objects.len(), 30);
        assert!(!scene.close_requested());
    }

    #[test]
    fn test_toggle_events_reach_the_rig() {
        let mut scene = scene();

        scene.handle_event(InputEvent::LightToggle(LightKey::Directional));
        assert!(scene.lighting.directional_on);
        assert!(scene.lights.directional.is_on());

        scene.handle_event(InputEvent::LightToggle(LightKey::Diffuse));
        for light in &scene.lights.points {
            assert_relative_eq!(light.effective_diffuse(), Vec3::zeros());
            assert_relative_eq!(light.effective_ambient(), Vec3::repeat(0.05));
        }
    }

    #[test]
    fn test_first_cursor_sample_does_not_turn_camera() {
        let mut scene = scene();
        let front = scene.camera.front();

        scene.handle_event(InputEvent::CursorMoved { x: 500.0, y: 400.0 });
        assert_relative_eq!(scene.camera.front(), front);

        scene.handle_event(InputEvent::CursorMoved { x: 510.0, y: 400.0 });
        assert_relative_eq!(scene.camera.yaw(), -89.0, epsilon = 1e-5);
    }

    #[test]
    fn test_scroll_and_close() {
        let mut scene = scene();

        scene.handle_event(InputEvent::Scrolled { y: 5.0 });
        assert_relative_eq!(scene.camera.zoom(), 40.0);

        scene.handle_event(InputEvent::FramebufferResized { width: 10, height: 10 });
        assert!(!scene.close_requested());
        scene.handle_event(InputEvent::CloseRequested);
        assert!(scene.close_requested());
    }

    #[test]
    fn test_apply_movement_combines_keys() {
        let mut scene = scene();
        let start = scene.camera.position;

        scene.apply_movement([CameraMovement::Forward, CameraMovement::Up], 0.4);

        // speed 2.5 * 0.4 s = 1 unit along -Z and +Y
        assert_relative_eq!(scene.camera.position, start + Vec3::new(0.0, 1.0, -1.0), epsilon = 1e-5);
    }
}
