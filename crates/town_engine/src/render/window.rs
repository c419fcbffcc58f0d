//! Window management using GLFW
//!
//! Creates the window with an OpenGL 3.3 core context, loads the GL function
//! pointers and turns GLFW events into [`InputEvent`]s.

use glfw::{Context, Key, WindowEvent};
use thiserror::Error;

use crate::core::config::WindowConfig;
use crate::input::{movement_for_key, InputEvent, MOVEMENT_KEYS};
use crate::render::opengl;
use crate::render::primitives::CameraMovement;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW could not be initialised
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    /// The window or its GL context could not be created
    #[error("Window creation failed ({width}x{height})")]
    CreationFailed {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window owning the current OpenGL context
pub struct WindowHandle {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
    framebuffer_size: (i32, i32),
    fallback_aspect: f32,
}

impl WindowHandle {
    /// Create the window, make its context current and load GL
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| WindowError::InitializationFailed(format!("{:?}", e)))?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        #[cfg(target_os = "macos")]
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed {
                width: config.width,
                height: config.height,
            })?;

        window.make_current();
        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);

        window.set_key_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_scroll_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_close_polling(true);

        if config.capture_cursor {
            window.set_cursor_mode(glfw::CursorMode::Disabled);
        }

        let framebuffer_size = window.get_framebuffer_size();
        opengl::set_viewport(framebuffer_size.0, framebuffer_size.1);
        opengl::init_pipeline_state();

        log::info!(
            "Created {}x{} window '{}' (framebuffer {}x{})",
            config.width,
            config.height,
            config.title,
            framebuffer_size.0,
            framebuffer_size.1
        );

        Ok(Self {
            glfw,
            window,
            events,
            framebuffer_size,
            fallback_aspect: config.width as f32 / config.height.max(1) as f32,
        })
    }

    /// Whether the window has been asked to close
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Request or cancel window close
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Poll GLFW and return the events the townscape reacts to
    ///
    /// Framebuffer resizes are applied to the GL viewport here before being
    /// passed on.
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        self.glfw.poll_events();

        let mut translated = Vec::new();
        for (_, event) in glfw::flush_messages(&self.events) {
            let Some(input) = InputEvent::from_glfw(&event) else {
                continue;
            };
            if let InputEvent::FramebufferResized { width, height } = input {
                log::debug!("Framebuffer resized to {}x{}", width, height);
                self.framebuffer_size = (width, height);
                opengl::set_viewport(width, height);
            }
            translated.push(input);
        }
        translated
    }

    /// Whether `key` is currently held down
    pub fn is_key_pressed(&self, key: Key) -> bool {
        matches!(self.window.get_key(key), glfw::Action::Press | glfw::Action::Repeat)
    }

    /// Camera movements whose keys are held this frame
    pub fn held_movements(&self) -> Vec<CameraMovement> {
        MOVEMENT_KEYS
            .iter()
            .filter(|&&key| self.is_key_pressed(key))
            .filter_map(|&key| movement_for_key(key))
            .collect()
    }

    /// Framebuffer width / height, or the configured ratio while minimised
    pub fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.framebuffer_size;
        if width > 0 && height > 0 {
            width as f32 / height as f32
        } else {
            self.fallback_aspect
        }
    }

    /// Present the back buffer
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }
}
