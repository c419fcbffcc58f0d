//! Townscape demo application
//!
//! Opens a window on the fixed town scene and runs the frame loop: poll input,
//! move the camera, draw, present.
//!
//! Controls: W/S/A/D move, E/R rise and sink, mouse looks around, scroll zooms,
//! 0 toggles the directional light, 1 the point lights, 2/3/4 the point-light
//! specular/diffuse/ambient channels, Escape quits.

use std::path::Path;

use thiserror::Error;
use town_engine::foundation::logging;
use town_engine::prelude::*;

/// Configuration file looked up in the working directory
const CONFIG_FILE: &str = "townscape.toml";

/// Top-level application errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration file could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Window or GL context creation failed
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// Shader or GL resource creation failed
    #[error("OpenGL error: {0}")]
    Gl(#[from] GlError),
}

/// Window, renderer and scene for one run
pub struct TownscapeApp {
    // Declared before `window` so GL objects are released while the context is alive
    renderer: Renderer,
    window: WindowHandle,
    scene: SceneState,
    timer: FrameTimer,
}

impl TownscapeApp {
    /// Create the window and GL resources for `config`
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        log::info!("Creating window...");
        let window = WindowHandle::new(&config.window)?;

        log::info!("Creating renderer...");
        let renderer = Renderer::new(&config.render)?;

        Ok(Self {
            renderer,
            window,
            scene: SceneState::new(config),
            timer: FrameTimer::new(),
        })
    }

    /// Run until the window is closed
    pub fn run(&mut self) {
        log::info!("Entering frame loop");

        while !self.window.should_close() {
            let delta_time = self.timer.tick();

            for event in self.window.poll_events() {
                self.scene.handle_event(event);
            }
            if self.scene.close_requested() {
                self.window.set_should_close(true);
            }

            self.scene.apply_movement(self.window.held_movements(), delta_time);

            self.renderer.render_frame(&self.scene, self.window.aspect_ratio());
            self.window.swap_buffers();
        }

        log::info!(
            "Frame loop finished after {} frames ({:.1} fps average)",
            self.timer.frame_count(),
            self.timer.average_fps()
        );
    }
}

fn main() -> Result<(), AppError> {
    let config_path = Path::new(CONFIG_FILE);
    let config = AppConfig::load_or_default(config_path)?;

    logging::init(config.log_level_filter());

    if config_path.exists() {
        log::info!("Loaded configuration from {}", config_path.display());
    } else {
        log::info!("No {} found, using default configuration", CONFIG_FILE);
    }

    config.validate().map_err(|e| {
        log::error!("Rejected configuration: {}", e);
        e
    })?;

    let mut app = TownscapeApp::new(&config).map_err(|e| {
        log::error!("Startup failed: {}", e);
        e
    })?;
    app.run();

    log::info!("Townscape finished");
    Ok(())
}
