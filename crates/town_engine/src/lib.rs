//! # Town Engine
//!
//! Lighting, free-fly camera and OpenGL plumbing for a small fixed-scene
//! townscape: a road lined with textured buildings, lit by one directional light
//! and four attenuated point lights that can be switched from the keyboard.
//!
//! ## Features
//!
//! - **Phong Lighting**: point and directional lights with per-channel switches
//! - **Free-Fly Camera**: keyboard translation, mouse-look, scroll zoom
//! - **GL-Free Core**: lights and camera write through [`render::UniformSink`],
//!   so they are testable without a context
//! - **Config Files**: TOML or RON startup configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use town_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::default();
//!     let mut window = WindowHandle::new(&config.window)?;
//!     let mut renderer = Renderer::new(&config.render)?;
//!     let mut scene = SceneState::new(&config);
//!     let mut timer = FrameTimer::new();
//!
//!     while !window.should_close() {
//!         let delta_time = timer.tick();
//!         for event in window.poll_events() {
//!             scene.handle_event(event);
//!         }
//!         scene.apply_movement(window.held_movements(), delta_time);
//!         renderer.render_frame(&scene, window.aspect_ratio());
//!         window.swap_buffers();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

pub mod assets;
pub mod config;
pub mod core;
pub mod foundation;
pub mod input;
pub mod render;
pub mod scene;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assets::{AssetError, ImageData};
    pub use crate::config::{Config, ConfigError};
    pub use crate::core::config::{AppConfig, CameraConfig, LightingConfig, RenderConfig, ShaderConfig, WindowConfig};
    pub use crate::foundation::math::{Mat4, Mat4Ext, Vec3, Vec4};
    pub use crate::foundation::time::FrameTimer;
    pub use crate::input::{InputEvent, LightKey, LightingState, MouseLook};
    pub use crate::render::opengl::{GlError, GlResult};
    pub use crate::render::{
        Camera, CameraMovement, DirectionalLight, LightRig, PointLight, Renderer, UniformRecorder, UniformSink,
        WindowError, WindowHandle,
    };
    pub use crate::scene::{SceneObject, SceneState};
}
