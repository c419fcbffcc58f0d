//! Input translation
//!
//! GLFW events are turned into plain [`InputEvent`] values at the window boundary;
//! everything past that point (light toggles, mouse-look, zoom) works on data and
//! never touches the windowing system.

pub mod mouse;
pub mod toggles;

pub use mouse::MouseLook;
pub use toggles::{LightKey, LightingState};

use crate::render::primitives::camera::CameraMovement;
use glfw::{Action, Key, WindowEvent};

/// Window-independent input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A lighting toggle key was pressed
    LightToggle(LightKey),
    /// Cursor moved to an absolute window position
    CursorMoved {
        /// Horizontal position in screen coordinates
        x: f32,
        /// Vertical position in screen coordinates
        y: f32,
    },
    /// Scroll wheel moved
    Scrolled {
        /// Vertical scroll delta
        y: f32,
    },
    /// Framebuffer size changed
    FramebufferResized {
        /// New width in pixels
        width: i32,
        /// New height in pixels
        height: i32,
    },
    /// User asked to close the window
    CloseRequested,
}

impl InputEvent {
    /// Translate a GLFW event, dropping anything the townscape does not react to
    ///
    /// Only press transitions toggle lights; repeats and releases are ignored.
    pub fn from_glfw(event: &WindowEvent) -> Option<Self> {
        match *event {
            WindowEvent::Key(Key::Escape, _, Action::Press, _) | WindowEvent::Close => {
                Some(Self::CloseRequested)
            }
            WindowEvent::Key(key, _, Action::Press, _) => LightKey::from_key(key).map(Self::LightToggle),
            WindowEvent::CursorPos(x, y) => Some(Self::CursorMoved { x: x as f32, y: y as f32 }),
            WindowEvent::Scroll(_, y) => Some(Self::Scrolled { y: y as f32 }),
            WindowEvent::FramebufferSize(width, height) => Some(Self::FramebufferResized { width, height }),
            _ => None,
        }
    }
}

/// Held key to continuous camera movement
pub fn movement_for_key(key: Key) -> Option<CameraMovement> {
    match key {
        Key::W => Some(CameraMovement::Forward),
        Key::S => Some(CameraMovement::Backward),
        Key::A => Some(CameraMovement::Left),
        Key::D => Some(CameraMovement::Right),
        Key::E => Some(CameraMovement::Up),
        Key::R => Some(CameraMovement::Down),
        _ => None,
    }
}

/// Keys polled every frame for continuous movement
pub const MOVEMENT_KEYS: [Key; 6] = [Key::W, Key::S, Key::A, Key::D, Key::E, Key::R];
